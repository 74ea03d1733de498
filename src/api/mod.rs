mod client;

pub use client::HttpApiClient;

use crate::error::DashboardResult;
use crate::models::{
    Appointment, AppointmentStatus, Barber, Barbershop, BarbershopUpdate, BusinessHoursPayload,
    Interval, NewBarber, NewInterval, NewService, Payment, Service, WeeklyScheduleEntry,
};
use async_trait::async_trait;

/// Backend operations used by the dashboard
#[async_trait]
pub trait BarbeariaApi: Send + Sync + 'static {
    /// Get the shop profile
    async fn get_barbershop(&self, barbearia_id: u64) -> DashboardResult<Barbershop>;

    /// Update the editable profile fields and return the stored profile
    async fn update_barbershop(
        &self,
        barbearia_id: u64,
        update: &BarbershopUpdate,
    ) -> DashboardResult<Barbershop>;

    /// Get the weekly business hours
    async fn get_business_hours(&self, barbearia_id: u64)
        -> DashboardResult<Vec<WeeklyScheduleEntry>>;

    /// Replace the weekly business hours with the given open days
    async fn update_business_hours(
        &self,
        barbearia_id: u64,
        hours: &[BusinessHoursPayload],
    ) -> DashboardResult<()>;

    async fn list_barbers(&self, barbearia_id: u64) -> DashboardResult<Vec<Barber>>;
    async fn create_barber(&self, barber: &NewBarber) -> DashboardResult<Barber>;
    async fn update_barber(&self, barber_id: u64, barber: &NewBarber) -> DashboardResult<Barber>;
    async fn remove_barber(&self, barber_id: u64) -> DashboardResult<()>;

    async fn list_services(&self, barbearia_id: u64) -> DashboardResult<Vec<Service>>;
    async fn create_service(&self, service: &NewService) -> DashboardResult<Service>;
    async fn update_service(&self, service_id: u64, service: &NewService)
        -> DashboardResult<Service>;
    async fn remove_service(&self, service_id: u64) -> DashboardResult<()>;

    async fn list_appointments(&self, barbearia_id: u64) -> DashboardResult<Vec<Appointment>>;

    /// Send a single status change
    async fn update_appointment_status(
        &self,
        appointment_id: u64,
        status: AppointmentStatus,
    ) -> DashboardResult<()>;

    async fn list_intervals(&self, barbearia_id: u64) -> DashboardResult<Vec<Interval>>;
    async fn create_interval(&self, interval: &NewInterval) -> DashboardResult<Interval>;
    async fn update_interval(
        &self,
        interval_id: u64,
        interval: &NewInterval,
    ) -> DashboardResult<Interval>;
    async fn remove_interval(&self, interval_id: u64) -> DashboardResult<()>;

    async fn list_payments(&self, barbearia_id: u64) -> DashboardResult<Vec<Payment>>;
}
