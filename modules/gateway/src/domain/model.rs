use std::fmt;

use addresses_sdk::Address;
use orders_sdk::Order;
use users_sdk::User;
use uuid::Uuid;

/// A named step of a gateway workflow.
///
/// The rendering is stable: it appears in workflow failure payloads and
/// clients may branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    GetUser,
    GetProduct,
    ListAddresses,
    ListInFlightOrders,
    DeleteAddress,
    CancelOrder,
    DeleteUser,
    PlaceOrder,
}

impl Step {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetUser => "get_user",
            Self::GetProduct => "get_product",
            Self::ListAddresses => "list_addresses",
            Self::ListInFlightOrders => "list_in_flight_orders",
            Self::DeleteAddress => "delete_address",
            Self::CancelOrder => "cancel_order",
            Self::DeleteUser => "delete_user",
            Self::PlaceOrder => "place_order",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one executed step, kept for the duration of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub step: Step,
    /// The entity the step acted on, when there is one.
    pub target: Option<Uuid>,
    /// The step found its target already gone and counted that as success.
    pub already_absent: bool,
}

impl StepRecord {
    pub(crate) fn done(step: Step, target: Uuid) -> Self {
        Self {
            step,
            target: Some(target),
            already_absent: false,
        }
    }

    pub(crate) fn absent(step: Step, target: Uuid) -> Self {
        Self {
            step,
            target: Some(target),
            already_absent: true,
        }
    }
}

/// Result of a completed user deletion cascade.
#[derive(Debug, Clone)]
pub struct DeletionReport {
    pub user_id: Uuid,
    pub steps: Vec<StepRecord>,
}

/// Aggregated view of a user and the resources they own.
#[derive(Debug, Clone)]
pub struct UserOverview {
    pub user: User,
    pub addresses: Vec<Address>,
    pub in_flight_orders: Vec<Order>,
}
