//! Route table and navigation listing.

use std::io::Write;

use philagri_core::Role;
use philagri_web::routes::table::{ROUTES, dashboard_path, nav_links};

use crate::error::CliError;

/// Print every route, or the navigation links of `role` when given.
///
/// # Errors
///
/// Returns an error if `role` is not a known role or output fails.
pub fn run(role: Option<&str>, out: &mut impl Write) -> Result<(), CliError> {
    match role {
        Some(role) => {
            let role: Role = role.parse().map_err(CliError::InvalidArgument)?;
            writeln!(out, "{} (lands on {})", role.label(), dashboard_path(role))?;
            for link in nav_links(role) {
                writeln!(out, "  {:<28} {}", link.path, link.label)?;
            }
        }
        None => {
            for route in ROUTES {
                let shell = if route.has_shell() { "" } else { " (no shell)" };
                writeln!(
                    out,
                    "{:<28} {:<12} {:?}{shell}",
                    route.path,
                    route.section.as_str(),
                    route.page
                )?;
            }
        }
    }
    Ok(())
}
