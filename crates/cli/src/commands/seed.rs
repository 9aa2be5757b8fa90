//! YAML dump of the seed store.

use std::io::Write;

use clap::ValueEnum;
use philagri_web::models::{
    Crop, ExpensePoint, Fertilizer, HarvestPoint, Machine, Message, Order, Product, Review,
    SalesPoint, Task, User, Worker,
};
use philagri_web::store::EntityStore;
use serde::Serialize;

use crate::error::CliError;

/// A seed collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Entity {
    Products,
    Orders,
    Messages,
    Reviews,
    User,
    Workers,
    Crops,
    Machines,
    Fertilizers,
    Tasks,
    Trends,
}

#[derive(Serialize)]
struct Trends<'a> {
    harvest: &'a [HarvestPoint],
    expenses: &'a [ExpensePoint],
    sales: &'a [SalesPoint],
}

#[derive(Serialize)]
struct SeedDump<'a> {
    user: &'a User,
    products: &'a [Product],
    orders: &'a [Order],
    messages: &'a [Message],
    reviews: &'a [Review],
    workers: &'a [Worker],
    crops: &'a [Crop],
    machines: &'a [Machine],
    fertilizers: &'a [Fertilizer],
    tasks: &'a [Task],
    trends: Trends<'a>,
}

fn trends(store: &EntityStore) -> Trends<'_> {
    Trends {
        harvest: store.harvest_trend(),
        expenses: store.expense_breakdown(),
        sales: store.sales_trend(),
    }
}

/// Serialize one collection, or the whole store, as YAML.
///
/// # Errors
///
/// Returns an error if serialization or output fails.
pub fn run(store: &EntityStore, entity: Option<Entity>, out: &mut impl Write) -> Result<(), CliError> {
    let yaml = match entity {
        None => serde_yaml::to_string(&SeedDump {
            user: store.user(),
            products: store.products(),
            orders: store.orders(),
            messages: store.messages(),
            reviews: store.reviews(),
            workers: store.workers(),
            crops: store.crops(),
            machines: store.machines(),
            fertilizers: store.fertilizers(),
            tasks: store.tasks(),
            trends: trends(store),
        })?,
        Some(Entity::Products) => serde_yaml::to_string(store.products())?,
        Some(Entity::Orders) => serde_yaml::to_string(store.orders())?,
        Some(Entity::Messages) => serde_yaml::to_string(store.messages())?,
        Some(Entity::Reviews) => serde_yaml::to_string(store.reviews())?,
        Some(Entity::User) => serde_yaml::to_string(store.user())?,
        Some(Entity::Workers) => serde_yaml::to_string(store.workers())?,
        Some(Entity::Crops) => serde_yaml::to_string(store.crops())?,
        Some(Entity::Machines) => serde_yaml::to_string(store.machines())?,
        Some(Entity::Fertilizers) => serde_yaml::to_string(store.fertilizers())?,
        Some(Entity::Tasks) => serde_yaml::to_string(store.tasks())?,
        Some(Entity::Trends) => serde_yaml::to_string(&trends(store))?,
    };
    out.write_all(yaml.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump(entity: Option<Entity>) -> String {
        let mut buf = Vec::new();
        let result = run(&EntityStore::seed(), entity, &mut buf);
        assert!(result.is_ok());
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[test]
    fn test_orders_round_trip_through_yaml() {
        let yaml = dump(Some(Entity::Orders));
        let orders: Vec<Order> = serde_yaml::from_str(&yaml).unwrap_or_default();
        assert_eq!(orders, EntityStore::seed().orders());
        assert!(yaml.contains("status: shipped"));
    }

    #[test]
    fn test_full_dump_has_every_section() {
        let yaml = dump(None);
        for key in ["user:", "products:", "tasks:", "trends:", "fertilizers:"] {
            assert!(yaml.contains(key), "missing {key}");
        }
    }
}
