mod subscription;
mod summary;

pub use subscription::{LeadTime, Recurrence, Subscription};
pub use summary::{BudgetSummary, RenewalAlert};

#[cfg(test)]
mod tests;
