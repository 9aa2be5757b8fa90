//! Order partitions and aggregates.

use philagri_core::{OrderStatus, Peso, UserId};

use crate::models::Order;

/// Which side of an order a party is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    Buyer,
    Seller,
}

/// Orders where `id` is the buyer (or seller), in store order.
#[must_use]
pub fn orders_for<'a, I>(orders: I, party: Party, id: &UserId) -> Vec<&'a Order>
where
    I: IntoIterator<Item = &'a Order>,
{
    orders
        .into_iter()
        .filter(|o| match party {
            Party::Buyer => &o.buyer_id == id,
            Party::Seller => &o.seller_id == id,
        })
        .collect()
}

/// All orders when `status` is `None`, else only exact matches.
#[must_use]
pub fn filter_by_status<'a, I>(orders: I, status: Option<OrderStatus>) -> Vec<&'a Order>
where
    I: IntoIterator<Item = &'a Order>,
{
    orders
        .into_iter()
        .filter(|o| status.is_none_or(|s| o.status == s))
        .collect()
}

/// Orders matching any of `statuses`, in input order.
#[must_use]
pub fn filter_by_statuses<'a, I>(orders: I, statuses: &[OrderStatus]) -> Vec<&'a Order>
where
    I: IntoIterator<Item = &'a Order>,
{
    orders
        .into_iter()
        .filter(|o| statuses.contains(&o.status))
        .collect()
}

/// Orders still moving through fulfilment (pending, confirmed or shipped).
#[must_use]
pub fn active_orders<'a, I>(orders: I) -> Vec<&'a Order>
where
    I: IntoIterator<Item = &'a Order>,
{
    orders.into_iter().filter(|o| o.status.is_active()).collect()
}

/// Sum of `total_price` (total spent for a buyer partition, earned for a
/// seller partition).
#[must_use]
pub fn total_price<'a, I>(orders: I) -> Peso
where
    I: IntoIterator<Item = &'a Order>,
{
    orders.into_iter().map(|o| o.total_price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EntityStore;

    fn ids(orders: &[&Order]) -> Vec<String> {
        orders.iter().map(|o| o.id.to_string()).collect()
    }

    #[test]
    fn test_orders_for_buyer_preserves_store_order() {
        let store = EntityStore::seed();
        let mine = orders_for(store.orders(), Party::Buyer, &UserId::new("b1"));
        assert_eq!(ids(&mine), ["o1", "o3"]);
    }

    #[test]
    fn test_orders_for_seller() {
        let store = EntityStore::seed();
        let sales = orders_for(store.orders(), Party::Seller, store.seller_id());
        assert_eq!(ids(&sales), ["o1"]);
        assert!(orders_for(store.orders(), Party::Seller, &UserId::new("nobody")).is_empty());
    }

    #[test]
    fn test_total_spent_for_buyer_fixture() {
        let store = EntityStore::seed();
        let mine = orders_for(store.orders(), Party::Buyer, &UserId::new("b1"));
        let spent = total_price(mine.iter().copied());
        assert_eq!(spent, Peso::whole(8600));
        assert_eq!(spent.display(), "₱8,600.00");
        assert_eq!(total_price(std::iter::empty::<&Order>()), Peso::ZERO);
    }

    #[test]
    fn test_filter_by_status_exact_and_idempotent() {
        let store = EntityStore::seed();
        let shipped = filter_by_status(store.orders(), Some(OrderStatus::Shipped));
        assert_eq!(ids(&shipped), ["o1"]);
        assert!(shipped.iter().all(|o| o.status == OrderStatus::Shipped));

        let again = filter_by_status(shipped.iter().copied(), Some(OrderStatus::Shipped));
        assert_eq!(ids(&again), ids(&shipped));
    }

    #[test]
    fn test_filter_by_status_none_returns_all() {
        let store = EntityStore::seed();
        let all = filter_by_status(store.orders(), None);
        assert_eq!(ids(&all), ["o1", "o2", "o3"]);
    }

    #[test]
    fn test_filter_by_statuses_keeps_input_order() {
        let store = EntityStore::seed();
        let in_flight = filter_by_statuses(
            store.orders(),
            &[OrderStatus::Shipped, OrderStatus::Confirmed],
        );
        assert_eq!(ids(&in_flight), ["o1", "o2"]);
    }

    #[test]
    fn test_active_orders_excludes_delivered() {
        let store = EntityStore::seed();
        let mine = orders_for(store.orders(), Party::Buyer, store.buyer_id());
        assert_eq!(ids(&active_orders(mine.iter().copied())), ["o1"]);
    }

    #[test]
    fn test_queries_do_not_mutate_input() {
        let store = EntityStore::seed();
        let before = store.orders().to_vec();
        let _ = filter_by_status(store.orders(), Some(OrderStatus::Delivered));
        let _ = total_price(store.orders());
        assert_eq!(store.orders(), before.as_slice());
    }
}
