//! Order listing for one side of the marketplace.

use std::io::Write;

use clap::ValueEnum;
use philagri_core::{OrderStatus, UserId};
use philagri_web::queries::{Party, filter_by_status, orders_for, total_price};
use philagri_web::store::EntityStore;

use crate::error::CliError;

/// Which side of an order to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PartyArg {
    Buyer,
    Seller,
}

impl From<PartyArg> for Party {
    fn from(arg: PartyArg) -> Self {
        match arg {
            PartyArg::Buyer => Self::Buyer,
            PartyArg::Seller => Self::Seller,
        }
    }
}

/// List a party's orders, optionally of one status, followed by their total.
///
/// Without `id` the demo buyer or seller is used.
///
/// # Errors
///
/// Returns an error if `status` is not a known order status or output fails.
pub fn run(
    store: &EntityStore,
    party: PartyArg,
    id: Option<&str>,
    status: Option<&str>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let party = Party::from(party);
    let id = id.map_or_else(
        || match party {
            Party::Buyer => store.buyer_id().clone(),
            Party::Seller => store.seller_id().clone(),
        },
        UserId::new,
    );
    let status: Option<OrderStatus> = status
        .map(str::parse)
        .transpose()
        .map_err(CliError::InvalidArgument)?;

    let orders = filter_by_status(orders_for(store.orders(), party, &id), status);
    tracing::debug!(%id, ?party, count = orders.len(), "Orders selected");

    for order in &orders {
        writeln!(
            out,
            "{:<4} {:<28} {:<10} {:>3}  {}",
            order.id.as_str(),
            order.product_name,
            order.status.as_str(),
            order.quantity,
            order.total_price.display()
        )?;
    }
    writeln!(
        out,
        "{} orders, total {}",
        orders.len(),
        total_price(orders.iter().copied()).display()
    )?;
    Ok(())
}
