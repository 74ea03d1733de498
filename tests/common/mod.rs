#![allow(dead_code)]

use async_trait::async_trait;
use barbearia_dashboard::api::BarbeariaApi;
use barbearia_dashboard::error::{api_error, DashboardResult};
use barbearia_dashboard::models::{
    Appointment, AppointmentStatus, Barber, Barbershop, BarbershopUpdate, BusinessHoursPayload,
    Client, Interval, IntervalBarber, NewBarber, NewInterval, NewService, Payment, Service,
    WeeklyScheduleEntry,
};
use barbearia_dashboard::utils::time::parse_timestamp;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Backend contents held by the mock
#[derive(Debug, Clone, Default)]
pub struct MockData {
    pub barbershop: Barbershop,
    pub business_hours: Vec<WeeklyScheduleEntry>,
    pub barbers: Vec<Barber>,
    pub services: Vec<Service>,
    pub appointments: Vec<Appointment>,
    pub intervals: Vec<Interval>,
    pub payments: Vec<Payment>,
    /// Every business-hours submission, in order
    pub saved_hours: Vec<Vec<BusinessHoursPayload>>,
    /// Every status update sent, in order
    pub status_updates: Vec<(u64, AppointmentStatus)>,
    next_id: u64,
}

/// In-memory implementation of the backend API
#[derive(Debug, Clone, Default)]
pub struct MockApi {
    data: Arc<Mutex<MockData>>,
    failing: Arc<Mutex<HashSet<&'static str>>>,
    delays: Arc<Mutex<HashMap<&'static str, Duration>>>,
}

impl MockApi {
    pub fn new(data: MockData) -> Self {
        Self {
            data: Arc::new(Mutex::new(MockData {
                next_id: 1000,
                ..data
            })),
            failing: Arc::default(),
            delays: Arc::default(),
        }
    }

    /// Make the named operation fail until `recover` is called
    pub async fn fail(&self, operation: &'static str) {
        self.failing.lock().await.insert(operation);
    }

    /// Hold the named operation for `delay` before it answers
    pub async fn delay(&self, operation: &'static str, delay: Duration) {
        self.delays.lock().await.insert(operation, delay);
    }

    pub async fn recover(&self, operation: &'static str) {
        self.failing.lock().await.remove(operation);
    }

    pub async fn data(&self) -> MockData {
        self.data.lock().await.clone()
    }

    async fn check(&self, operation: &'static str) -> DashboardResult<()> {
        let delay = self.delays.lock().await.get(operation).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.lock().await.contains(operation) {
            Err(api_error(&format!(
                "{} failed: HTTP 500 Internal Server Error - boom",
                operation
            )))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BarbeariaApi for MockApi {
    async fn get_barbershop(&self, _barbearia_id: u64) -> DashboardResult<Barbershop> {
        self.check("get_barbershop").await?;
        Ok(self.data.lock().await.barbershop.clone())
    }

    async fn update_barbershop(
        &self,
        _barbearia_id: u64,
        update: &BarbershopUpdate,
    ) -> DashboardResult<Barbershop> {
        self.check("update_barbershop").await?;
        let mut data = self.data.lock().await;
        let shop = &mut data.barbershop;
        let optional = |value: &str| (!value.is_empty()).then(|| value.to_string());
        shop.name = update.name.clone();
        shop.owner_name = optional(&update.owner_name);
        shop.email = optional(&update.email);
        shop.phone = optional(&update.phone);
        shop.state = optional(&update.state);
        shop.city = optional(&update.city);
        shop.postal_code = optional(&update.postal_code);
        shop.neighborhood = optional(&update.neighborhood);
        shop.complement = optional(&update.complement);
        shop.reference_point = optional(&update.reference_point);
        Ok(shop.clone())
    }

    async fn get_business_hours(
        &self,
        _barbearia_id: u64,
    ) -> DashboardResult<Vec<WeeklyScheduleEntry>> {
        self.check("get_business_hours").await?;
        Ok(self.data.lock().await.business_hours.clone())
    }

    async fn update_business_hours(
        &self,
        _barbearia_id: u64,
        hours: &[BusinessHoursPayload],
    ) -> DashboardResult<()> {
        self.check("update_business_hours").await?;
        self.data.lock().await.saved_hours.push(hours.to_vec());
        Ok(())
    }

    async fn list_barbers(&self, _barbearia_id: u64) -> DashboardResult<Vec<Barber>> {
        self.check("list_barbers").await?;
        Ok(self.data.lock().await.barbers.clone())
    }

    async fn create_barber(&self, barber: &NewBarber) -> DashboardResult<Barber> {
        self.check("create_barber").await?;
        let mut data = self.data.lock().await;
        data.next_id += 1;
        let created = Barber {
            id: data.next_id,
            name: barber.name.clone(),
            specialty: barber.specialty.clone(),
            active: true,
        };
        data.barbers.push(created.clone());
        Ok(created)
    }

    async fn update_barber(&self, barber_id: u64, barber: &NewBarber) -> DashboardResult<Barber> {
        self.check("update_barber").await?;
        let mut data = self.data.lock().await;
        let stored = data
            .barbers
            .iter_mut()
            .find(|b| b.id == barber_id)
            .ok_or_else(|| api_error("HTTP 404 Not Found - barbeiro"))?;
        stored.name = barber.name.clone();
        stored.specialty = barber.specialty.clone();
        Ok(stored.clone())
    }

    async fn remove_barber(&self, barber_id: u64) -> DashboardResult<()> {
        self.check("remove_barber").await?;
        self.data.lock().await.barbers.retain(|b| b.id != barber_id);
        Ok(())
    }

    async fn list_services(&self, _barbearia_id: u64) -> DashboardResult<Vec<Service>> {
        self.check("list_services").await?;
        Ok(self.data.lock().await.services.clone())
    }

    async fn create_service(&self, service: &NewService) -> DashboardResult<Service> {
        self.check("create_service").await?;
        let mut data = self.data.lock().await;
        data.next_id += 1;
        let created = Service {
            id: data.next_id,
            name: service.name.clone(),
            duration_min: service.duration_min,
            price: service.price,
            details: Some(service.details.clone()).filter(|d| !d.is_empty()),
        };
        data.services.push(created.clone());
        Ok(created)
    }

    async fn update_service(
        &self,
        service_id: u64,
        service: &NewService,
    ) -> DashboardResult<Service> {
        self.check("update_service").await?;
        let mut data = self.data.lock().await;
        let stored = data
            .services
            .iter_mut()
            .find(|s| s.id == service_id)
            .ok_or_else(|| api_error("HTTP 404 Not Found - servico"))?;
        stored.name = service.name.clone();
        stored.duration_min = service.duration_min;
        stored.price = service.price;
        Ok(stored.clone())
    }

    async fn remove_service(&self, service_id: u64) -> DashboardResult<()> {
        self.check("remove_service").await?;
        self.data.lock().await.services.retain(|s| s.id != service_id);
        Ok(())
    }

    async fn list_appointments(&self, _barbearia_id: u64) -> DashboardResult<Vec<Appointment>> {
        self.check("list_appointments").await?;
        Ok(self.data.lock().await.appointments.clone())
    }

    async fn update_appointment_status(
        &self,
        appointment_id: u64,
        status: AppointmentStatus,
    ) -> DashboardResult<()> {
        self.check("update_appointment_status").await?;
        let mut data = self.data.lock().await;
        data.status_updates.push((appointment_id, status));
        if let Some(stored) = data.appointments.iter_mut().find(|a| a.id == appointment_id) {
            stored.status = status;
        }
        Ok(())
    }

    async fn list_intervals(&self, _barbearia_id: u64) -> DashboardResult<Vec<Interval>> {
        self.check("list_intervals").await?;
        Ok(self.data.lock().await.intervals.clone())
    }

    async fn create_interval(&self, interval: &NewInterval) -> DashboardResult<Interval> {
        self.check("create_interval").await?;
        let mut data = self.data.lock().await;
        data.next_id += 1;
        let barber = interval.barber_id.and_then(|id| {
            data.barbers.iter().find(|b| b.id == id).map(|b| IntervalBarber {
                name: b.name.clone(),
            })
        });
        let created = Interval {
            id: data.next_id,
            barbearia_id: Some(interval.barbearia_id),
            barber_id: interval.barber_id,
            barber,
            day_of_week: interval.day_of_week,
            start_time: interval.start_time.clone(),
            end_time: interval.end_time.clone(),
            date: interval.date.clone(),
        };
        data.intervals.push(created.clone());
        Ok(created)
    }

    async fn update_interval(
        &self,
        interval_id: u64,
        interval: &NewInterval,
    ) -> DashboardResult<Interval> {
        self.check("update_interval").await?;
        let mut data = self.data.lock().await;
        let stored = data
            .intervals
            .iter_mut()
            .find(|i| i.id == interval_id)
            .ok_or_else(|| api_error("HTTP 404 Not Found - intervalo"))?;
        stored.barber_id = interval.barber_id;
        stored.day_of_week = interval.day_of_week;
        stored.start_time = interval.start_time.clone();
        stored.end_time = interval.end_time.clone();
        stored.date = interval.date.clone();
        Ok(stored.clone())
    }

    async fn remove_interval(&self, interval_id: u64) -> DashboardResult<()> {
        self.check("remove_interval").await?;
        self.data.lock().await.intervals.retain(|i| i.id != interval_id);
        Ok(())
    }

    async fn list_payments(&self, _barbearia_id: u64) -> DashboardResult<Vec<Payment>> {
        self.check("list_payments").await?;
        Ok(self.data.lock().await.payments.clone())
    }
}

pub fn appointment(
    id: u64,
    at: &str,
    status: AppointmentStatus,
    price_cents: i64,
    barber_id: u64,
) -> Appointment {
    Appointment {
        id,
        scheduled_at: parse_timestamp(at).unwrap(),
        status,
        service_price: Decimal::new(price_cents, 2),
        service_name: "Corte".to_string(),
        barber_id,
        client: None,
    }
}

pub fn with_client(mut appointment: Appointment, name: &str, phone: &str) -> Appointment {
    appointment.client = Some(Client {
        name: Some(name.to_string()),
        phone: Some(phone.to_string()),
    });
    appointment
}

pub fn barber(id: u64, name: &str, active: bool) -> Barber {
    Barber {
        id,
        name: name.to_string(),
        specialty: "Corte".to_string(),
        active,
    }
}

/// A small shop with two barbers and appointments around 2024-06-10
pub fn sample_data() -> MockData {
    MockData {
        barbershop: Barbershop {
            id: 1,
            name: "Navalha".to_string(),
            city: Some("Campinas".to_string()),
            ..Default::default()
        },
        barbers: vec![barber(1, "João", true), barber(2, "Carlos", false)],
        services: vec![Service {
            id: 1,
            name: "Corte".to_string(),
            duration_min: 30,
            price: Decimal::new(5000, 2),
            details: None,
        }],
        appointments: vec![
            with_client(
                appointment(1, "2024-06-10T12:00:00Z", AppointmentStatus::Completed, 5000, 1),
                "Ana",
                "11999990000",
            ),
            appointment(2, "2024-06-10T15:00:00Z", AppointmentStatus::Scheduled, 3000, 2),
            appointment(3, "2024-06-11T12:00:00Z", AppointmentStatus::Canceled, 4000, 1),
            appointment(4, "2024-06-20T12:00:00Z", AppointmentStatus::Scheduled, 4000, 1),
        ],
        ..Default::default()
    }
}
