use super::actor::{DashboardActor, DashboardCommand, DashboardState};
use crate::api::BarbeariaApi;
use crate::components::appointments::{AppointmentFilter, CalendarMonth, CsvExport, DashboardStats};
use crate::components::catalog::{BarberForm, IntervalForm, ServiceForm};
use crate::error::{component_error, DashboardResult};
use crate::models::{Appointment, Barber, Interval, Payment, Service, StatusAction};
use crate::utils::display::DisplaySettings;
use crate::utils::time::Clock;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Handle for interacting with the dashboard actor
#[derive(Clone)]
pub struct DashboardHandle {
    command_tx: mpsc::Sender<DashboardCommand>,
    /// Backend loads currently awaiting a reply
    loads_in_flight: Arc<AtomicUsize>,
    _actor_task: Arc<JoinHandle<()>>,
}

/// Counts a load as outstanding until dropped, so a cancelled caller still clears it
struct LoadGuard(Arc<AtomicUsize>);

impl LoadGuard {
    fn start(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for LoadGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl DashboardHandle {
    /// Create a new DashboardHandle and spawn the actor
    pub fn new(
        api: Arc<dyn BarbeariaApi>,
        barbearia_id: u64,
        display: DisplaySettings,
        clock: Clock,
    ) -> Self {
        let (mut actor, command_tx) = DashboardActor::new(api, barbearia_id, display, clock);

        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            command_tx,
            loads_in_flight: Arc::new(AtomicUsize::new(0)),
            _actor_task: Arc::new(actor_task),
        }
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(mpsc::Sender<DashboardResult<T>>) -> DashboardCommand,
    ) -> DashboardResult<T> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(command(response_tx))
            .await
            .map_err(|e| component_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| component_error("Response channel closed"))?
    }

    /// True while a refresh or payments load is outstanding.
    ///
    /// Read without going through the actor, so it can be polled while the
    /// actor is busy with the load itself.
    pub fn is_loading(&self) -> bool {
        self.loads_in_flight.load(Ordering::SeqCst) > 0
    }

    /// Reload the shop, barbers, services, appointments and intervals
    pub async fn refresh(&self) -> DashboardResult<()> {
        let _loading = LoadGuard::start(&self.loads_in_flight);
        self.request(DashboardCommand::Refresh).await
    }

    pub async fn load_payments(&self) -> DashboardResult<Vec<Payment>> {
        let _loading = LoadGuard::start(&self.loads_in_flight);
        self.request(DashboardCommand::LoadPayments).await
    }

    pub async fn set_filter(&self, filter: AppointmentFilter) -> DashboardResult<()> {
        self.request(|tx| DashboardCommand::SetFilter(filter, tx)).await
    }

    /// Appointments matching the current filter, most recent first
    pub async fn filtered_appointments(&self) -> DashboardResult<Vec<Appointment>> {
        self.request(DashboardCommand::GetFiltered).await
    }

    pub async fn stats(&self) -> DashboardResult<DashboardStats> {
        self.request(DashboardCommand::GetStats).await
    }

    pub async fn barber_today_count(&self, barber_id: u64) -> DashboardResult<usize> {
        self.request(|tx| DashboardCommand::BarberTodayCount(barber_id, tx))
            .await
    }

    pub async fn select_date(&self, date: NaiveDate) -> DashboardResult<()> {
        self.request(|tx| DashboardCommand::SelectDate(date, tx)).await
    }

    /// Move the calendar by `months` (negative goes back)
    pub async fn shift_month(&self, months: i32) -> DashboardResult<CalendarMonth> {
        self.request(|tx| DashboardCommand::ShiftMonth(months, tx)).await
    }

    pub async fn calendar(&self) -> DashboardResult<CalendarMonth> {
        self.request(DashboardCommand::GetCalendar).await
    }

    /// Appointments displayed on the selected date
    pub async fn day_appointments(&self) -> DashboardResult<Vec<Appointment>> {
        self.request(DashboardCommand::GetDayAppointments).await
    }

    pub async fn update_status(
        &self,
        appointment_id: u64,
        action: StatusAction,
    ) -> DashboardResult<Appointment> {
        self.request(|tx| DashboardCommand::UpdateStatus(appointment_id, action, tx))
            .await
    }

    /// CSV of the currently filtered appointments
    pub async fn export_csv(&self) -> DashboardResult<CsvExport> {
        self.request(DashboardCommand::ExportCsv).await
    }

    pub async fn save_barber(&self, form: BarberForm) -> DashboardResult<Barber> {
        self.request(|tx| DashboardCommand::SaveBarber(form, tx)).await
    }

    pub async fn remove_barber(&self, barber_id: u64) -> DashboardResult<()> {
        self.request(|tx| DashboardCommand::RemoveBarber(barber_id, tx))
            .await
    }

    pub async fn save_service(&self, form: ServiceForm) -> DashboardResult<Service> {
        self.request(|tx| DashboardCommand::SaveService(form, tx)).await
    }

    pub async fn remove_service(&self, service_id: u64) -> DashboardResult<()> {
        self.request(|tx| DashboardCommand::RemoveService(service_id, tx))
            .await
    }

    pub async fn save_interval(&self, form: IntervalForm) -> DashboardResult<Interval> {
        self.request(|tx| DashboardCommand::SaveInterval(form, tx)).await
    }

    pub async fn remove_interval(&self, interval_id: u64) -> DashboardResult<()> {
        self.request(|tx| DashboardCommand::RemoveInterval(interval_id, tx))
            .await
    }

    /// Copy of the whole dashboard state
    pub async fn snapshot(&self) -> DashboardResult<DashboardState> {
        self.request(DashboardCommand::Snapshot).await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> DashboardResult<()> {
        let _ = self.command_tx.send(DashboardCommand::Shutdown).await;
        Ok(())
    }
}
