use addresses_sdk::AddressesClient;
use futures::future::join_all;
use orders_sdk::{NewOrder, Order, OrdersClient};
use products_sdk::ProductsClient;
use service_kernel::{codes, CallError, ErrorInfo, ServiceResult};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};
use users_sdk::UsersClient;
use uuid::Uuid;

use crate::domain::error::{WorkflowError, WorkflowResult};
use crate::domain::model::{DeletionReport, Step, StepRecord, UserOverview};

/// Gateway-side orchestrator over the bounded-context clients.
///
/// Every workflow treats a client call as already resolved when it returns:
/// success, domain failure, infrastructure failure, or cancelled. Retry
/// policy, if any, lives beneath the clients and is invisible here.
#[derive(Clone)]
pub struct Service {
    users: UsersClient,
    addresses: AddressesClient,
    orders: OrdersClient,
    products: ProductsClient,
}

impl Service {
    pub fn new(
        users: UsersClient,
        addresses: AddressesClient,
        orders: OrdersClient,
        products: ProductsClient,
    ) -> Self {
        Self {
            users,
            addresses,
            orders,
            products,
        }
    }

    /// Delete a user together with their owned resources.
    ///
    /// Policy:
    /// - the aggregate key is validated first; nothing is called on a bad key;
    /// - dependent loads run concurrently, as do the cleanup steps; a failing
    ///   sibling never cancels the others, so cleanup is maximised;
    /// - a dependent already gone counts as success for its step;
    /// - any genuine cleanup failure stops the workflow before the user
    ///   record is touched;
    /// - a failure of the user-record step after dependents were removed is
    ///   reported as a partial deletion. Forward-only, no compensation.
    #[instrument(skip(self, cancel), fields(user_id = raw_user_id))]
    pub async fn delete_user_cascade(
        &self,
        cancel: &CancellationToken,
        raw_user_id: &str,
    ) -> WorkflowResult<DeletionReport> {
        let user_id = parse_id(raw_user_id, "user_id")?;

        info!("Starting user deletion cascade");

        // Dependent resources are loaded concurrently; nothing has been
        // mutated yet, so a failure here stops the workflow cleanly.
        let (addresses, orders) = tokio::join!(
            self.addresses.list_addresses(cancel, user_id),
            self.orders.list_in_flight(cancel, user_id),
        );
        let addresses = addresses.map_err(|e| step_failure(Step::ListAddresses, e))?;
        let orders = orders.map_err(|e| step_failure(Step::ListInFlightOrders, e))?;

        debug!(
            addresses = addresses.len(),
            in_flight_orders = orders.len(),
            "Loaded dependent resources"
        );

        let address_cleanups = addresses.iter().map(|address| {
            let client = self.addresses.clone();
            let cancel = cancel.clone();
            let id = address.id;
            async move { (id, client.delete_address(&cancel, id).await) }
        });
        let order_cleanups = orders.iter().map(|order| {
            let client = self.orders.clone();
            let cancel = cancel.clone();
            let id = order.id;
            async move { (id, client.cancel_order(&cancel, id).await.map(|_| ())) }
        });

        // Join barrier: the aggregate decision waits for every cleanup step.
        let (address_outcomes, order_outcomes) =
            tokio::join!(join_all(address_cleanups), join_all(order_cleanups));

        let mut steps: Vec<StepRecord> = Vec::new();
        let mut failure: Option<(Step, CallError)> = None;
        let mut cancelled = false;

        for (id, outcome) in address_outcomes {
            assess(Step::DeleteAddress, id, outcome, &mut steps, &mut failure, &mut cancelled);
        }
        for (id, outcome) in order_outcomes {
            assess(Step::CancelOrder, id, outcome, &mut steps, &mut failure, &mut cancelled);
        }

        if let Some((step, error)) = failure {
            warn!(%step, code = error.code(), "Cleanup failed; user record left untouched");
            return Err(WorkflowError::StepFailed { step, error });
        }
        if cancelled || cancel.is_cancelled() {
            return Err(WorkflowError::Cancelled);
        }

        // Only reached with every dependent confirmed gone.
        match self.users.delete_user(cancel, user_id).await {
            Ok(()) => steps.push(StepRecord::done(Step::DeleteUser, user_id)),
            Err(error) if error.is_not_found() => {
                debug!("User record already absent");
                steps.push(StepRecord::absent(Step::DeleteUser, user_id));
            }
            Err(CallError::Cancelled) => return Err(WorkflowError::Cancelled),
            Err(error) => {
                let removed_dependents = steps.iter().any(|record| !record.already_absent);
                warn!(code = error.code(), removed_dependents, "User record deletion failed");
                return Err(if removed_dependents {
                    WorkflowError::PartialDeletion {
                        step: Step::DeleteUser,
                        error,
                    }
                } else {
                    WorkflowError::StepFailed {
                        step: Step::DeleteUser,
                        error,
                    }
                });
            }
        }

        info!(steps = steps.len(), "User deletion cascade completed");
        Ok(DeletionReport { user_id, steps })
    }

    /// Aggregate a user with the resources they own.
    #[instrument(skip(self, cancel), fields(user_id = raw_user_id))]
    pub async fn user_overview(
        &self,
        cancel: &CancellationToken,
        raw_user_id: &str,
    ) -> WorkflowResult<UserOverview> {
        let user_id = parse_id(raw_user_id, "user_id")?;

        let (user, addresses, orders) = tokio::join!(
            self.users.get_user(cancel, user_id),
            self.addresses.list_addresses(cancel, user_id),
            self.orders.list_in_flight(cancel, user_id),
        );

        // A missing user dominates the report regardless of the other arms.
        let user = user.map_err(|e| step_failure(Step::GetUser, e))?;
        let addresses = addresses.map_err(|e| step_failure(Step::ListAddresses, e))?;
        let in_flight_orders = orders.map_err(|e| step_failure(Step::ListInFlightOrders, e))?;

        Ok(UserOverview {
            user,
            addresses,
            in_flight_orders,
        })
    }

    /// Place an order after verifying that both the user and the product
    /// exist. The verification reads run concurrently; the mutation only
    /// happens once both came back green.
    #[instrument(
        skip(self, cancel),
        fields(user_id = raw_user_id, product_id = raw_product_id, quantity)
    )]
    pub async fn place_order(
        &self,
        cancel: &CancellationToken,
        raw_user_id: &str,
        raw_product_id: &str,
        quantity: u32,
    ) -> WorkflowResult<Order> {
        let user_id = parse_id(raw_user_id, "user_id")?;
        let product_id = parse_id(raw_product_id, "product_id")?;
        if quantity == 0 {
            return Err(invalid_request("quantity", "must be greater than zero"));
        }

        let (user, product) = tokio::join!(
            self.users.get_user(cancel, user_id),
            self.products.get_product(cancel, product_id),
        );
        let user = user.map_err(|e| step_failure(Step::GetUser, e))?;
        let product = product.map_err(|e| step_failure(Step::GetProduct, e))?;

        let order = self
            .orders
            .place_order(
                cancel,
                NewOrder {
                    user_id,
                    product_id,
                    quantity,
                },
            )
            .await
            .map_err(|e| step_failure(Step::PlaceOrder, e))?;

        info!(
            order_id = %order.id,
            user = %user.email,
            product = %product.name,
            "Order placed through gateway"
        );
        Ok(order)
    }
}

/// Classify one cleanup outcome.
///
/// A missing target is idempotent success; cancellation is collected but
/// never aborts siblings; the first genuine failure wins the aggregate.
fn assess(
    step: Step,
    target: Uuid,
    outcome: ServiceResult<()>,
    steps: &mut Vec<StepRecord>,
    failure: &mut Option<(Step, CallError)>,
    cancelled: &mut bool,
) {
    match outcome {
        Ok(()) => steps.push(StepRecord::done(step, target)),
        Err(error) if error.is_not_found() => {
            debug!(%step, target = %target, "Dependent already absent; treating as success");
            steps.push(StepRecord::absent(step, target));
        }
        Err(CallError::Cancelled) => *cancelled = true,
        Err(error) => {
            warn!(%step, target = %target, code = error.code(), "Cleanup step failed");
            if failure.is_none() {
                *failure = Some((step, error));
            }
        }
    }
}

fn step_failure(step: Step, error: CallError) -> WorkflowError {
    if error.is_cancelled() {
        WorkflowError::Cancelled
    } else {
        WorkflowError::StepFailed { step, error }
    }
}

fn parse_id(raw: &str, field: &'static str) -> WorkflowResult<Uuid> {
    let id = Uuid::parse_str(raw.trim())
        .map_err(|_| invalid_request(field, "must be a UUID"))?;
    if id.is_nil() {
        return Err(invalid_request(field, "must not be nil"));
    }
    Ok(id)
}

fn invalid_request(field: &'static str, reason: &'static str) -> WorkflowError {
    WorkflowError::InvalidRequest(
        ErrorInfo::new(
            codes::VALIDATION_ERROR,
            format!("Validation failed: {field}: {reason}"),
        )
        .with_detail("field", field)
        .with_detail("reason", reason),
    )
}
