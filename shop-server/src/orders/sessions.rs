//! Per-session carts
//!
//! Carts live only in memory, keyed by the client's session id, and are
//! gone after a restart. A session whose cart ends up empty holds no entry.

use dashmap::DashMap;
use shared::models::PricingUnit;

use super::cart::Cart;

#[derive(Debug, Default)]
pub struct CartSessions {
    carts: DashMap<String, Cart>,
}

impl CartSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the session's cart under the session's lock.
    ///
    /// An empty cart is created for an unknown session and dropped again
    /// if `f` leaves it empty.
    pub fn with_cart<R>(&self, session_id: &str, f: impl FnOnce(&mut Cart) -> R) -> R {
        let result = {
            let mut cart = self.carts.entry(session_id.to_string()).or_default();
            f(cart.value_mut())
        };
        self.carts.remove_if(session_id, |_, cart| cart.is_empty());
        result
    }

    /// Drop one line. Unknown sessions are left without an entry.
    pub fn remove_line(&self, session_id: &str, product_id: &str, unit: PricingUnit) -> Cart {
        let cart = match self.carts.get_mut(session_id) {
            Some(mut cart) => {
                cart.remove(product_id, unit);
                cart.value().clone()
            }
            None => return Cart::default(),
        };
        self.carts.remove_if(session_id, |_, cart| cart.is_empty());
        cart
    }

    /// Copy of the session's cart (empty if the session has none)
    pub fn snapshot(&self, session_id: &str) -> Cart {
        self.carts
            .get(session_id)
            .map(|cart| cart.value().clone())
            .unwrap_or_default()
    }

    pub fn clear(&self, session_id: &str) {
        self.carts.remove(session_id);
    }

    /// Number of sessions holding a non-empty cart
    pub fn len(&self) -> usize {
        self.carts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::CartItem;

    fn banana(quantity: u32) -> CartItem {
        CartItem {
            product_id: "p3".into(),
            name: "Robusta Banana".into(),
            image: "banana.jpg".into(),
            unit: PricingUnit::Dozen,
            price: 60,
            quantity,
        }
    }

    #[test]
    fn test_sessions_are_isolated() {
        let sessions = CartSessions::new();
        sessions.with_cart("a", |cart| cart.add(banana(2))).unwrap();
        sessions.with_cart("b", |cart| cart.add(banana(1))).unwrap();

        assert_eq!(sessions.snapshot("a").total(), 120);
        assert_eq!(sessions.snapshot("b").total(), 60);
        assert!(sessions.snapshot("c").is_empty());
        assert_eq!(sessions.len(), 2);
    }

    #[test]
    fn test_clear_only_touches_one_session() {
        let sessions = CartSessions::new();
        sessions.with_cart("a", |cart| cart.add(banana(2))).unwrap();
        sessions.with_cart("b", |cart| cart.add(banana(1))).unwrap();

        sessions.clear("a");
        assert!(sessions.snapshot("a").is_empty());
        assert_eq!(sessions.snapshot("b").items().len(), 1);
        assert_eq!(sessions.len(), 1);
    }

    #[test]
    fn test_empty_carts_hold_no_entry() {
        let sessions = CartSessions::new();

        // Read-only and rejected work leaves nothing behind
        sessions.with_cart("a", |cart| cart.view());
        sessions
            .with_cart("b", |cart| cart.add(banana(u32::MAX)))
            .unwrap_err();
        assert!(sessions.remove_line("c", "p3", PricingUnit::Dozen).is_empty());
        assert!(sessions.is_empty());

        sessions.with_cart("a", |cart| cart.add(banana(1))).unwrap();
        assert_eq!(sessions.len(), 1);
        sessions.remove_line("a", "p3", PricingUnit::Dozen);
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_remove_line_keeps_rest_of_cart() {
        let sessions = CartSessions::new();
        sessions
            .with_cart("a", |cart| {
                cart.add(banana(1))?;
                cart.add(CartItem {
                    product_id: "p5".into(),
                    name: "Grapes".into(),
                    image: "grapes.jpg".into(),
                    unit: PricingUnit::Kg,
                    price: 80,
                    quantity: 1,
                })
            })
            .unwrap();

        let cart = sessions.remove_line("a", "p3", PricingUnit::Dozen);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(sessions.snapshot("a"), cart);
    }
}
