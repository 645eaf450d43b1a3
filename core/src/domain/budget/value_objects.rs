use crate::domain::{common::entities::app_errors::CoreError, menu::entities::MenuInfo};

/// A spending limit, finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Budget(f64);

impl Budget {
    pub fn new(amount: f64) -> Result<Self, CoreError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::InvalidBudget);
        }

        Ok(Self(amount))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanningRequest {
    pub menu: MenuInfo,
    pub budget: Budget,
    pub user_note: Option<String>,
}
