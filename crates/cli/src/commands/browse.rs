//! Catalog search with the browse page's filter and sort.

use std::io::Write;

use philagri_core::Peso;
use philagri_web::queries::catalog::{BrowseFilter, BrowseSort, CategoryFilter, browse, sort_products};
use philagri_web::store::EntityStore;

use crate::error::CliError;

/// Browse arguments as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct BrowseArgs {
    pub query: String,
    pub category: String,
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub sort: String,
}

impl BrowseArgs {
    fn filter(&self) -> BrowseFilter {
        let defaults = BrowseFilter::default();
        BrowseFilter {
            query: self.query.clone(),
            category: CategoryFilter::parse(&self.category),
            min_price: self.min.map_or(defaults.min_price, Peso::whole),
            max_price: self.max.map_or(defaults.max_price, Peso::whole),
        }
    }
}

/// Print the available products matching `args`, in the requested order.
///
/// # Errors
///
/// Returns an error if the sort is unknown or output fails.
pub fn run(store: &EntityStore, args: &BrowseArgs, out: &mut impl Write) -> Result<(), CliError> {
    let sort: BrowseSort = args.sort.parse().map_err(CliError::InvalidArgument)?;
    let products = sort_products(browse(store.products(), &args.filter()), sort);

    if products.is_empty() {
        writeln!(out, "No products match")?;
        return Ok(());
    }
    for product in products {
        writeln!(
            out,
            "{:<3} {:<28} {:<16} {:>10}/{:<6} {}",
            product.id.as_str(),
            product.name,
            product.category,
            product.price.display(),
            product.unit,
            product.rating
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(sort: &str) -> BrowseArgs {
        BrowseArgs {
            category: "all".to_owned(),
            sort: sort.to_owned(),
            ..BrowseArgs::default()
        }
    }

    fn ids(args: &BrowseArgs) -> Vec<String> {
        let mut buf = Vec::new();
        let result = run(&EntityStore::seed(), args, &mut buf);
        assert!(result.is_ok());
        String::from_utf8_lossy(&buf)
            .lines()
            .filter_map(|l| l.split_whitespace().next().map(str::to_owned))
            .collect()
    }

    #[test]
    fn test_price_sort_is_ascending() {
        let store = EntityStore::seed();
        let listed = ids(&args("price-low"));
        let prices: Vec<Peso> = listed
            .iter()
            .filter_map(|id| store.product(id).map(|p| p.price))
            .collect();
        assert!(!prices.is_empty());
        assert!(prices.windows(2).all(|w| w.first() <= w.last()));
    }

    #[test]
    fn test_no_match() {
        let query = BrowseArgs {
            query: "durian".to_owned(),
            ..args("rating")
        };
        assert_eq!(ids(&query), vec!["No"]);
    }

    #[test]
    fn test_unknown_sort() {
        let mut buf = Vec::new();
        let result = run(&EntityStore::seed(), &args("cheapest"), &mut buf);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }
}
