use std::cell::{Cell, RefCell};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::complaint_id::ComplaintId;
use crate::dispatcher::NotificationDispatcher;
use crate::error::DeliveryError;
use crate::models::{ComplaintField, ComplaintForm, ComplaintRecord};

#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Suspends the current task; supplied by whichever runtime hosts the form.
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    pub form: ComplaintForm,
    pub status: FormStatus,
    pub open: bool,
    pub last_complaint_id: Option<ComplaintId>,
}

impl FormSnapshot {
    pub fn can_submit(&self) -> bool {
        self.status != FormStatus::Submitting && self.form.is_complete()
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// A field is blank or no category was picked; nothing was sent.
    NotSubmittable,
    /// Another submission is still in flight.
    AlreadySubmitting,
    Registered(ComplaintRecord),
    Failed(DeliveryError),
}

type Observer = Box<dyn Fn(&FormSnapshot)>;

/// Owns the complaint form and drives a submission through the dispatcher.
///
/// Single-threaded: the state sits in a `RefCell` and is never borrowed across
/// an `.await`, so the UI can keep editing while a submission is suspended on
/// the network.
pub struct FormController<T: Timer, C: Clock = SystemClock> {
    dispatcher: NotificationDispatcher,
    timer: T,
    clock: C,
    reset_delay: Duration,
    state: RefCell<FormSnapshot>,
    // Bumped on every submission so a stale reset never clobbers a newer one.
    epoch: Cell<u64>,
    observer: RefCell<Option<Observer>>,
}

impl<T: Timer, C: Clock> FormController<T, C> {
    pub fn new(dispatcher: NotificationDispatcher, timer: T, clock: C, reset_delay: Duration) -> Self {
        Self {
            dispatcher,
            timer,
            clock,
            reset_delay,
            state: RefCell::new(FormSnapshot::default()),
            epoch: Cell::new(0),
            observer: RefCell::new(None),
        }
    }

    pub fn set_observer(&self, observer: impl Fn(&FormSnapshot) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> FormStatus {
        self.state.borrow().status
    }

    pub fn is_submittable(&self) -> bool {
        self.state.borrow().form.is_complete()
    }

    pub fn open(&self) {
        self.update(|state| state.open = true);
    }

    /// Refused while a submission is in flight.
    pub fn close(&self) -> bool {
        if self.status() == FormStatus::Submitting {
            debug!("Ignoring close while a complaint is being submitted");
            return false;
        }
        self.update(|state| state.open = false);
        true
    }

    pub fn update_field(&self, field: ComplaintField, value: &str) {
        self.update(|state| {
            state.form.set(field, value);
            if state.status != FormStatus::Submitting {
                state.status = FormStatus::Idle;
            }
        });
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let (record, epoch) = match self.begin_submission() {
            Ok(started) => started,
            Err(outcome) => return outcome,
        };
        self.notify();

        info!(
            complaint_id = %record.complaint_id,
            category = %record.category,
            "Submitting complaint"
        );

        if let Err(e) = self.dispatcher.send_email(&record).await {
            warn!(complaint_id = %record.complaint_id, error = %e, "Complaint submission failed");
            self.update(|state| state.status = FormStatus::Error);
            return SubmitOutcome::Failed(e);
        }

        let sms = self.dispatcher.send_sms(&record).await;
        info!(complaint_id = %record.complaint_id, ?sms, "Complaint registered");
        self.update(|state| {
            state.status = FormStatus::Success;
            state.last_complaint_id = Some(record.complaint_id.clone());
        });

        self.timer.sleep(self.reset_delay).await;

        if self.epoch.get() == epoch {
            self.update(|state| {
                state.form = ComplaintForm::default();
                state.status = FormStatus::Idle;
                state.open = false;
            });
        }

        SubmitOutcome::Registered(record)
    }

    fn begin_submission(&self) -> Result<(ComplaintRecord, u64), SubmitOutcome> {
        let mut state = self.state.borrow_mut();

        if state.status == FormStatus::Submitting {
            debug!("Complaint already being submitted, ignoring");
            return Err(SubmitOutcome::AlreadySubmitting);
        }

        if !state.form.is_complete() {
            return Err(SubmitOutcome::NotSubmittable);
        }

        let now = self.clock.now();
        let complaint_id = ComplaintId::generate(now, &mut rand::thread_rng());
        let record = state
            .form
            .to_record(complaint_id, now)
            .ok_or(SubmitOutcome::NotSubmittable)?;

        state.status = FormStatus::Submitting;
        let epoch = self.epoch.get() + 1;
        self.epoch.set(epoch);
        Ok((record, epoch))
    }

    fn update(&self, change: impl FnOnce(&mut FormSnapshot)) {
        change(&mut self.state.borrow_mut());
        self.notify();
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ComplaintConfig, ExecutionMode};
    use crate::delivery::tests::RecordingPoster;
    use crate::delivery::DeliveryStrategy;
    use crate::models::ComplaintCategory;
    use chrono::TimeZone;
    use regex::Regex;
    use std::rc::Rc;

    struct TokioTimer;

    #[async_trait(?Send)]
    impl Timer for TokioTimer {
        async fn sleep(&self, duration: Duration) {
            tokio::time::sleep(duration).await;
        }
    }

    type CallLog = Rc<RefCell<Vec<&'static str>>>;

    /// Succeeds or fails after an optional simulated network delay.
    struct SlowStrategy {
        name: &'static str,
        succeed: bool,
        latency: Duration,
        calls: CallLog,
    }

    #[async_trait(?Send)]
    impl DeliveryStrategy for SlowStrategy {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn attempt_delivery(&self, _record: &ComplaintRecord) -> Result<(), DeliveryError> {
            self.calls.borrow_mut().push(self.name);
            tokio::time::sleep(self.latency).await;
            if self.succeed {
                Ok(())
            } else {
                Err(DeliveryError::Transport("connection refused".to_string()))
            }
        }
    }

    fn strategy(name: &'static str, succeed: bool, calls: &CallLog) -> SlowStrategy {
        SlowStrategy {
            name,
            succeed,
            latency: Duration::from_millis(100),
            calls: calls.clone(),
        }
    }

    fn fixed_clock() -> MockClock {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(|| Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap());
        clock
    }

    fn controller(dispatcher: NotificationDispatcher) -> FormController<TokioTimer, MockClock> {
        FormController::new(dispatcher, TokioTimer, fixed_clock(), Duration::from_secs(3))
    }

    fn fill_jane(controller: &FormController<TokioTimer, MockClock>) {
        controller.update_field(ComplaintField::Name, "Jane Doe");
        controller.update_field(ComplaintField::Email, "jane@example.com");
        controller.update_field(ComplaintField::Phone, "+15551234567");
        controller.update_field(ComplaintField::Category, "Billing Inquiry");
        controller.update_field(ComplaintField::Subject, "Double charge");
        controller.update_field(ComplaintField::Description, "I was charged twice.");
    }

    fn record_statuses(controller: &FormController<TokioTimer, MockClock>) -> Rc<RefCell<Vec<FormStatus>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        controller.set_observer(move |snapshot| {
            let mut seen = sink.borrow_mut();
            if seen.last() != Some(&snapshot.status) {
                seen.push(snapshot.status);
            }
        });
        seen
    }

    #[tokio::test(start_paused = true)]
    async fn jane_doe_in_development_registers_then_resets() {
        let config = ComplaintConfig {
            mode: ExecutionMode::Development,
            ..ComplaintConfig::default()
        };
        let poster = RecordingPoster::rejecting(404);
        let controller = controller(NotificationDispatcher::from_config(&config, poster));
        controller.open();
        fill_jane(&controller);
        let statuses = record_statuses(&controller);

        let started = tokio::time::Instant::now();
        let record = match controller.submit().await {
            SubmitOutcome::Registered(record) => record,
            other => panic!("unexpected outcome {:?}", other),
        };

        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, "jane@example.com");
        assert_eq!(record.phone, "+15551234567");
        assert_eq!(record.category, ComplaintCategory::BillingInquiry);
        assert_eq!(record.subject, "Double charge");
        assert_eq!(record.description, "I was charged twice.");
        assert_eq!(record.timestamp, Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap());
        let shape = Regex::new(r"^COMP-MVDRWQO0-[0-9A-Z]{4}$").unwrap();
        assert!(shape.is_match(record.complaint_id.as_str()));

        assert_eq!(
            *statuses.borrow(),
            vec![FormStatus::Submitting, FormStatus::Success, FormStatus::Idle]
        );
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(3));
        assert!(elapsed < Duration::from_secs(4));

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.form, ComplaintForm::default());
        assert!(!snapshot.open);
        assert_eq!(snapshot.last_complaint_id, Some(record.complaint_id));
    }

    #[tokio::test(start_paused = true)]
    async fn email_failure_keeps_data_and_skips_sms() {
        let calls = CallLog::default();
        let dispatcher = NotificationDispatcher::new()
            .with_email_strategy(strategy("email", false, &calls))
            .with_sms_strategy(strategy("sms", true, &calls));
        let controller = controller(dispatcher);
        controller.open();
        fill_jane(&controller);

        let outcome = controller.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Failed(DeliveryError::Exhausted { .. })));
        assert_eq!(*calls.borrow(), vec!["email"]);
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.status, FormStatus::Error);
        assert!(snapshot.open);
        assert_eq!(snapshot.form.name, "Jane Doe");
        assert_eq!(snapshot.form.description, "I was charged twice.");
    }

    #[tokio::test(start_paused = true)]
    async fn sms_failure_still_counts_as_success() {
        let calls = CallLog::default();
        let dispatcher = NotificationDispatcher::new()
            .with_email_strategy(strategy("email", true, &calls))
            .with_sms_strategy(strategy("sms", false, &calls));
        let controller = controller(dispatcher);
        fill_jane(&controller);
        let statuses = record_statuses(&controller);

        let outcome = controller.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Registered(_)));
        assert_eq!(*calls.borrow(), vec!["email", "sms"]);
        assert!(statuses.borrow().contains(&FormStatus::Success));
    }

    #[tokio::test(start_paused = true)]
    async fn editing_after_error_returns_to_idle() {
        let calls = CallLog::default();
        let dispatcher =
            NotificationDispatcher::new().with_email_strategy(strategy("email", false, &calls));
        let controller = controller(dispatcher);
        fill_jane(&controller);

        controller.submit().await;
        assert_eq!(controller.status(), FormStatus::Error);

        controller.update_field(ComplaintField::Email, "jane.doe@example.com");
        assert_eq!(controller.status(), FormStatus::Idle);
        assert_eq!(controller.snapshot().form.email, "jane.doe@example.com");
    }

    #[tokio::test(start_paused = true)]
    async fn editing_during_success_window_returns_to_idle() {
        let calls = CallLog::default();
        let dispatcher = NotificationDispatcher::new()
            .with_email_strategy(strategy("email", true, &calls))
            .with_sms_strategy(strategy("sms", true, &calls));
        let controller = controller(dispatcher);
        controller.open();
        fill_jane(&controller);

        let edit = async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            assert_eq!(controller.status(), FormStatus::Success);
            controller.update_field(ComplaintField::Description, "Charged twice on the 3rd.");
            let snapshot = controller.snapshot();
            (snapshot.status, snapshot.form.description)
        };
        let (outcome, (status, description)) = tokio::join!(controller.submit(), edit);

        assert!(matches!(outcome, SubmitOutcome::Registered(_)));
        assert_eq!(status, FormStatus::Idle);
        assert_eq!(description, "Charged twice on the 3rd.");
        // the pending reset still closes and clears the form
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.status, FormStatus::Idle);
        assert_eq!(snapshot.form, ComplaintForm::default());
        assert!(!snapshot.open);
    }

    #[tokio::test]
    async fn missing_category_blocks_submission() {
        let calls = CallLog::default();
        let dispatcher =
            NotificationDispatcher::new().with_email_strategy(strategy("email", true, &calls));
        let controller = controller(dispatcher);
        fill_jane(&controller);
        controller.update_field(ComplaintField::Category, "");

        assert!(!controller.is_submittable());
        assert!(!controller.snapshot().can_submit());
        assert!(matches!(controller.submit().await, SubmitOutcome::NotSubmittable));
        assert!(calls.borrow().is_empty());
        assert_eq!(controller.status(), FormStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn second_submit_while_in_flight_is_ignored() {
        let calls = CallLog::default();
        let dispatcher = NotificationDispatcher::new()
            .with_email_strategy(strategy("email", true, &calls))
            .with_sms_strategy(strategy("sms", true, &calls));
        let controller = controller(dispatcher);
        fill_jane(&controller);

        let (first, second) = tokio::join!(controller.submit(), controller.submit());

        let registered = [&first, &second]
            .iter()
            .filter(|outcome| matches!(outcome, SubmitOutcome::Registered(_)))
            .count();
        let ignored = [&first, &second]
            .iter()
            .filter(|outcome| matches!(outcome, SubmitOutcome::AlreadySubmitting))
            .count();
        assert_eq!((registered, ignored), (1, 1));
        assert_eq!(*calls.borrow(), vec!["email", "sms"]);
    }

    #[tokio::test(start_paused = true)]
    async fn close_is_refused_while_submitting() {
        let calls = CallLog::default();
        let dispatcher =
            NotificationDispatcher::new().with_email_strategy(strategy("email", false, &calls));
        let controller = controller(dispatcher);
        controller.open();
        fill_jane(&controller);

        let close_attempt = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            let refused = !controller.close();
            let status = controller.status();
            controller.update_field(ComplaintField::Subject, "Charged twice");
            (refused, status, controller.status())
        };
        let (_, (refused, during, after_edit)) = tokio::join!(controller.submit(), close_attempt);

        assert!(refused);
        assert_eq!(during, FormStatus::Submitting);
        assert_eq!(after_edit, FormStatus::Submitting);
        assert!(controller.snapshot().open);
        assert!(controller.close());
        assert!(!controller.snapshot().open);
    }

    #[tokio::test(start_paused = true)]
    async fn resubmitting_during_success_window_is_not_reset_by_the_old_timer() {
        let calls = CallLog::default();
        let dispatcher = NotificationDispatcher::new()
            .with_email_strategy(strategy("email", true, &calls))
            .with_email_strategy(strategy("never", true, &calls));
        let controller = controller(dispatcher);
        controller.open();
        fill_jane(&controller);

        let second_round = async {
            // first submission is in its success window after ~100ms
            tokio::time::sleep(Duration::from_millis(500)).await;
            assert_eq!(controller.status(), FormStatus::Success);
            controller.update_field(ComplaintField::Subject, "Charged again");
            assert_eq!(controller.status(), FormStatus::Idle);
            controller.submit().await
        };
        let (first, second) = tokio::join!(controller.submit(), second_round);

        assert!(matches!(first, SubmitOutcome::Registered(_)));
        match second {
            SubmitOutcome::Registered(record) => assert_eq!(record.subject, "Charged again"),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(*calls.borrow(), vec!["email", "email"]);
        assert_eq!(controller.status(), FormStatus::Idle);
        assert_eq!(controller.snapshot().form, ComplaintForm::default());
    }
}
