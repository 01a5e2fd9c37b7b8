//! Communication plan state and wizard readiness rules.

mod communication;
mod step;

pub use communication::{CommunicationPlan, MessageData, PlanError};
pub use step::{MessageSlot, WizardStep};
