//! Loyalty tiers and point accounts.

use tracing::debug;

use crate::output::{Message, Sink};

/// Errors from [`LoyaltyAccount::redeem`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LoyaltyError {
    #[error("not enough points: requested {requested}, available {available}")]
    Insufficient { requested: u32, available: u32 },
}

/// Anything that is worth loyalty points.
pub trait LoyaltyComponent {
    fn points(&self) -> u32;
}

/// Entry tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicLoyalty;

impl BasicLoyalty {
    pub const POINTS: u32 = 10;
}

impl LoyaltyComponent for BasicLoyalty {
    fn points(&self) -> u32 {
        Self::POINTS
    }
}

/// Upper tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PremiumLoyalty;

impl PremiumLoyalty {
    pub const POINTS: u32 = 50;
}

impl LoyaltyComponent for PremiumLoyalty {
    fn points(&self) -> u32 {
        Self::POINTS
    }
}

/// A group of components worth the sum of its children. Bundles nest.
#[derive(Default)]
pub struct LoyaltyBundle {
    children: Vec<Box<dyn LoyaltyComponent>>,
}

impl LoyaltyBundle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, component: Box<dyn LoyaltyComponent>) {
        self.children.push(component);
    }

    /// Remove the child at `index`, if there is one.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn LoyaltyComponent>> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl LoyaltyComponent for LoyaltyBundle {
    fn points(&self) -> u32 {
        self.children
            .iter()
            .fold(0, |acc, child| acc.saturating_add(child.points()))
    }
}

impl core::fmt::Debug for LoyaltyBundle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoyaltyBundle")
            .field("children", &self.children.len())
            .field("points", &self.points())
            .finish()
    }
}

/// A client's point balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoyaltyAccount {
    owner: String,
    balance: u32,
}

impl LoyaltyAccount {
    #[must_use]
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            balance: 0,
        }
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub const fn balance(&self) -> u32 {
        self.balance
    }

    pub fn add_points(&mut self, points: u32, sink: &mut dyn Sink) {
        self.balance = self.balance.saturating_add(points);
        debug!(owner = %self.owner, points, balance = self.balance, "Points earned");
        sink.emit(Message::PointsEarned {
            owner: self.owner.clone(),
            points,
            balance: self.balance,
        });
    }

    /// Credit whatever `component` is worth.
    pub fn award(&mut self, component: &dyn LoyaltyComponent, sink: &mut dyn Sink) {
        self.add_points(component.points(), sink);
    }

    /// Spend points. Returns the remaining balance.
    ///
    /// # Errors
    ///
    /// Returns [`LoyaltyError::Insufficient`] when `points` exceeds the
    /// balance; the balance is left untouched and the failure is reported.
    pub fn redeem(&mut self, points: u32, sink: &mut dyn Sink) -> Result<u32, LoyaltyError> {
        let Some(remaining) = self.balance.checked_sub(points) else {
            debug!(owner = %self.owner, points, balance = self.balance, "Redemption refused");
            sink.emit(Message::PointsInsufficient {
                owner: self.owner.clone(),
                requested: points,
                available: self.balance,
            });
            return Err(LoyaltyError::Insufficient {
                requested: points,
                available: self.balance,
            });
        };
        self.balance = remaining;
        sink.emit(Message::PointsRedeemed {
            owner: self.owner.clone(),
            points,
            balance: remaining,
        });
        Ok(remaining)
    }
}
