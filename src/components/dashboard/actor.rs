use crate::api::BarbeariaApi;
use crate::components::appointments::{
    appointments_today_for_barber, day_appointments, export_appointments, AppointmentFilter,
    CalendarMonth, CsvExport, DashboardStats,
};
use crate::components::catalog::{BarberForm, IntervalForm, ServiceForm};
use crate::error::{validation_error, DashboardResult};
use crate::models::{
    Appointment, Barber, Barbershop, Interval, Payment, Service, StatusAction,
};
use crate::utils::display::DisplaySettings;
use crate::utils::time::{shift_month, Clock};
use chrono::{Datelike, NaiveDate};
use rust_i18n::t;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Everything the dashboard screen renders from
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub barbershop: Option<Barbershop>,
    pub barbers: Vec<Barber>,
    pub services: Vec<Service>,
    pub appointments: Vec<Appointment>,
    pub intervals: Vec<Interval>,
    pub payments: Vec<Payment>,
    pub filter: AppointmentFilter,
    pub selected_date: NaiveDate,
    /// First day of the month shown in the calendar
    pub calendar_month: NaiveDate,
    pub error: Option<String>,
}

impl DashboardState {
    fn new(today: NaiveDate) -> Self {
        Self {
            barbershop: None,
            barbers: Vec::new(),
            services: Vec::new(),
            appointments: Vec::new(),
            intervals: Vec::new(),
            payments: Vec::new(),
            filter: AppointmentFilter::default(),
            selected_date: today,
            calendar_month: today.with_day(1).unwrap_or(today),
            error: None,
        }
    }
}

type Reply<T> = mpsc::Sender<DashboardResult<T>>;

/// Commands that can be sent to the dashboard actor
pub enum DashboardCommand {
    Refresh(Reply<()>),
    LoadPayments(Reply<Vec<Payment>>),
    SetFilter(AppointmentFilter, Reply<()>),
    GetFiltered(Reply<Vec<Appointment>>),
    GetStats(Reply<DashboardStats>),
    BarberTodayCount(u64, Reply<usize>),
    SelectDate(NaiveDate, Reply<()>),
    ShiftMonth(i32, Reply<CalendarMonth>),
    GetCalendar(Reply<CalendarMonth>),
    GetDayAppointments(Reply<Vec<Appointment>>),
    UpdateStatus(u64, StatusAction, Reply<Appointment>),
    ExportCsv(Reply<CsvExport>),
    SaveBarber(BarberForm, Reply<Barber>),
    RemoveBarber(u64, Reply<()>),
    SaveService(ServiceForm, Reply<Service>),
    RemoveService(u64, Reply<()>),
    SaveInterval(IntervalForm, Reply<Interval>),
    RemoveInterval(u64, Reply<()>),
    Snapshot(Reply<DashboardState>),
    Shutdown,
}

/// Single owner of the dashboard state
pub struct DashboardActor {
    api: Arc<dyn BarbeariaApi>,
    barbearia_id: u64,
    display: DisplaySettings,
    clock: Clock,
    state: DashboardState,
    command_rx: mpsc::Receiver<DashboardCommand>,
}

impl DashboardActor {
    /// Create a new actor and the sender used to reach it
    pub fn new(
        api: Arc<dyn BarbeariaApi>,
        barbearia_id: u64,
        display: DisplaySettings,
        clock: Clock,
    ) -> (Self, mpsc::Sender<DashboardCommand>) {
        let (command_tx, command_rx) = mpsc::channel(32);
        let today = display.today(clock());

        let actor = Self {
            api,
            barbearia_id,
            display,
            clock,
            state: DashboardState::new(today),
            command_rx,
        };

        (actor, command_tx)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Dashboard actor started for shop {}", self.barbearia_id);

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                DashboardCommand::Refresh(response_tx) => {
                    let result = self.refresh().await;
                    let _ = response_tx.send(result).await;
                }
                DashboardCommand::LoadPayments(response_tx) => {
                    let result = self.load_payments().await;
                    let _ = response_tx.send(result).await;
                }
                DashboardCommand::SetFilter(filter, response_tx) => {
                    self.state.filter = filter;
                    let _ = response_tx.send(Ok(())).await;
                }
                DashboardCommand::GetFiltered(response_tx) => {
                    let _ = response_tx.send(Ok(self.filtered())).await;
                }
                DashboardCommand::GetStats(response_tx) => {
                    let _ = response_tx.send(Ok(self.stats())).await;
                }
                DashboardCommand::BarberTodayCount(barber_id, response_tx) => {
                    let count = appointments_today_for_barber(
                        &self.state.appointments,
                        barber_id,
                        &self.display,
                        self.today(),
                    );
                    let _ = response_tx.send(Ok(count)).await;
                }
                DashboardCommand::SelectDate(date, response_tx) => {
                    self.state.selected_date = date;
                    let _ = response_tx.send(Ok(())).await;
                }
                DashboardCommand::ShiftMonth(months, response_tx) => {
                    let result = self.shift_month(months);
                    let _ = response_tx.send(result).await;
                }
                DashboardCommand::GetCalendar(response_tx) => {
                    let _ = response_tx.send(Ok(self.calendar())).await;
                }
                DashboardCommand::GetDayAppointments(response_tx) => {
                    let day = day_appointments(
                        &self.state.appointments,
                        self.state.selected_date,
                        &self.display,
                    );
                    let _ = response_tx.send(Ok(day)).await;
                }
                DashboardCommand::UpdateStatus(id, action, response_tx) => {
                    let result = self.update_status(id, action).await;
                    let _ = response_tx.send(result).await;
                }
                DashboardCommand::ExportCsv(response_tx) => {
                    let result = export_appointments(
                        &self.filtered(),
                        &self.state.barbers,
                        &self.display,
                        (self.clock)(),
                    );
                    let _ = response_tx.send(result).await;
                }
                DashboardCommand::SaveBarber(form, response_tx) => {
                    let result = self.save_barber(form).await;
                    let _ = response_tx.send(result).await;
                }
                DashboardCommand::RemoveBarber(id, response_tx) => {
                    let result = self.remove_barber(id).await;
                    let _ = response_tx.send(result).await;
                }
                DashboardCommand::SaveService(form, response_tx) => {
                    let result = self.save_service(form).await;
                    let _ = response_tx.send(result).await;
                }
                DashboardCommand::RemoveService(id, response_tx) => {
                    let result = self.remove_service(id).await;
                    let _ = response_tx.send(result).await;
                }
                DashboardCommand::SaveInterval(form, response_tx) => {
                    let result = self.save_interval(form).await;
                    let _ = response_tx.send(result).await;
                }
                DashboardCommand::RemoveInterval(id, response_tx) => {
                    let result = self.remove_interval(id).await;
                    let _ = response_tx.send(result).await;
                }
                DashboardCommand::Snapshot(response_tx) => {
                    let _ = response_tx.send(Ok(self.state.clone())).await;
                }
                DashboardCommand::Shutdown => {
                    info!("Dashboard actor shutting down");
                    break;
                }
            }
        }

        info!("Dashboard actor shut down");
    }

    fn locale(&self) -> &str {
        &self.display.locale
    }

    fn today(&self) -> NaiveDate {
        self.display.today((self.clock)())
    }

    /// Replace the snapshot with fresh data; on failure the previous one is kept
    async fn refresh(&mut self) -> DashboardResult<()> {
        let id = self.barbearia_id;

        let result = tokio::try_join!(
            self.api.get_barbershop(id),
            self.api.list_barbers(id),
            self.api.list_services(id),
            self.api.list_appointments(id),
            self.api.list_intervals(id),
        );

        match result {
            Ok((barbershop, barbers, services, appointments, intervals)) => {
                info!(
                    "Loaded shop {}: {} barbers, {} services, {} appointments, {} intervals",
                    id,
                    barbers.len(),
                    services.len(),
                    appointments.len(),
                    intervals.len()
                );
                self.state.barbershop = Some(barbershop);
                self.state.barbers = barbers;
                self.state.services = services;
                self.state.appointments = appointments;
                self.state.intervals = intervals;
                self.state.error = None;
                Ok(())
            }
            Err(e) => {
                error!("Failed to load dashboard data for shop {}: {}", id, e);
                self.state.error = Some(
                    t!("dashboard_load_failed", locale = self.locale(), error = e.to_string())
                        .to_string(),
                );
                Err(e)
            }
        }
    }

    async fn load_payments(&mut self) -> DashboardResult<Vec<Payment>> {
        match self.api.list_payments(self.barbearia_id).await {
            Ok(payments) => {
                info!("Loaded {} payments", payments.len());
                self.state.payments = payments.clone();
                Ok(payments)
            }
            Err(e) => {
                error!("Failed to load payments for shop {}: {}", self.barbearia_id, e);
                self.state.error = Some(
                    t!("payments_load_failed", locale = self.locale(), error = e.to_string())
                        .to_string(),
                );
                Err(e)
            }
        }
    }

    fn filtered(&self) -> Vec<Appointment> {
        self.state
            .filter
            .apply(&self.state.appointments, &self.display, self.today())
    }

    fn stats(&self) -> DashboardStats {
        DashboardStats::compute(
            &self.state.appointments,
            &self.state.barbers,
            &self.state.services,
            &self.display,
            self.today(),
        )
    }

    fn calendar(&self) -> CalendarMonth {
        CalendarMonth::build(
            self.state.calendar_month,
            self.state.selected_date,
            self.today(),
            &self.state.appointments,
            &self.display,
        )
    }

    fn shift_month(&mut self, months: i32) -> DashboardResult<CalendarMonth> {
        let month = shift_month(self.state.calendar_month, months)
            .ok_or_else(|| validation_error(&format!("Cannot move calendar by {} months", months)))?;
        self.state.calendar_month = month;
        Ok(self.calendar())
    }

    /// Apply `action` to one appointment; the local copy changes only after the backend accepts it
    async fn update_status(&mut self, id: u64, action: StatusAction) -> DashboardResult<Appointment> {
        let Some(index) = self.state.appointments.iter().position(|a| a.id == id) else {
            return Err(validation_error(&t!(
                "appointment_not_found",
                locale = self.locale(),
                id = id
            )));
        };

        let next = self.state.appointments[index].next_status(action)?;

        match self.api.update_appointment_status(id, next).await {
            Ok(()) => {
                info!("Appointment {} is now {}", id, next);
                let appointment = &mut self.state.appointments[index];
                appointment.status = next;
                Ok(appointment.clone())
            }
            Err(e) => {
                error!("Failed to update appointment {}: {}", id, e);
                self.state.error = Some(
                    t!("appointment_update_failed", locale = self.locale(), error = e.to_string())
                        .to_string(),
                );
                Err(e)
            }
        }
    }

    fn record_failure(&mut self, message: String) {
        self.state.error = Some(message);
    }

    async fn reload_barbers(&mut self) {
        match self.api.list_barbers(self.barbearia_id).await {
            Ok(barbers) => self.state.barbers = barbers,
            Err(e) => warn!("Failed to reload barbers: {}", e),
        }
    }

    async fn reload_services(&mut self) {
        match self.api.list_services(self.barbearia_id).await {
            Ok(services) => self.state.services = services,
            Err(e) => warn!("Failed to reload services: {}", e),
        }
    }

    async fn reload_intervals(&mut self) {
        match self.api.list_intervals(self.barbearia_id).await {
            Ok(intervals) => self.state.intervals = intervals,
            Err(e) => warn!("Failed to reload intervals: {}", e),
        }
    }

    async fn save_barber(&mut self, form: BarberForm) -> DashboardResult<Barber> {
        let payload = form.validate(self.barbearia_id, self.locale())?;
        let result = match form.editing {
            Some(id) => self.api.update_barber(id, &payload).await,
            None => self.api.create_barber(&payload).await,
        };

        match result {
            Ok(barber) => {
                info!("Saved barber {} ({})", barber.id, barber.name);
                self.reload_barbers().await;
                Ok(barber)
            }
            Err(e) => {
                error!("Failed to save barber: {}", e);
                let message = t!("barber_save_failed", locale = self.locale(), error = e.to_string());
                self.record_failure(message.to_string());
                Err(e)
            }
        }
    }

    async fn remove_barber(&mut self, id: u64) -> DashboardResult<()> {
        match self.api.remove_barber(id).await {
            Ok(()) => {
                info!("Removed barber {}", id);
                self.reload_barbers().await;
                Ok(())
            }
            Err(e) => {
                error!("Failed to remove barber: {}", e);
                let message = t!("barber_remove_failed", locale = self.locale(), error = e.to_string());
                self.record_failure(message.to_string());
                Err(e)
            }
        }
    }

    async fn save_service(&mut self, form: ServiceForm) -> DashboardResult<Service> {
        let payload = form.validate(self.barbearia_id, self.locale())?;
        let result = match form.editing {
            Some(id) => self.api.update_service(id, &payload).await,
            None => self.api.create_service(&payload).await,
        };

        match result {
            Ok(service) => {
                info!("Saved service {} ({})", service.id, service.name);
                self.reload_services().await;
                Ok(service)
            }
            Err(e) => {
                error!("Failed to save service: {}", e);
                let message = t!("service_save_failed", locale = self.locale(), error = e.to_string());
                self.record_failure(message.to_string());
                Err(e)
            }
        }
    }

    async fn remove_service(&mut self, id: u64) -> DashboardResult<()> {
        match self.api.remove_service(id).await {
            Ok(()) => {
                info!("Removed service {}", id);
                self.reload_services().await;
                Ok(())
            }
            Err(e) => {
                error!("Failed to remove service: {}", e);
                let message = t!("service_remove_failed", locale = self.locale(), error = e.to_string());
                self.record_failure(message.to_string());
                Err(e)
            }
        }
    }

    async fn save_interval(&mut self, form: IntervalForm) -> DashboardResult<Interval> {
        let payload = form.validate(self.barbearia_id, self.locale())?;
        let result = match form.editing {
            Some(id) => self.api.update_interval(id, &payload).await,
            None => self.api.create_interval(&payload).await,
        };

        match result {
            Ok(interval) => {
                info!("Saved interval {}", interval.id);
                self.reload_intervals().await;
                Ok(interval)
            }
            Err(e) => {
                error!("Failed to save interval: {}", e);
                let message = t!("interval_save_failed", locale = self.locale(), error = e.to_string());
                self.record_failure(message.to_string());
                Err(e)
            }
        }
    }

    async fn remove_interval(&mut self, id: u64) -> DashboardResult<()> {
        match self.api.remove_interval(id).await {
            Ok(()) => {
                info!("Removed interval {}", id);
                self.reload_intervals().await;
                Ok(())
            }
            Err(e) => {
                error!("Failed to remove interval: {}", e);
                let message = t!("interval_remove_failed", locale = self.locale(), error = e.to_string());
                self.record_failure(message.to_string());
                Err(e)
            }
        }
    }
}
