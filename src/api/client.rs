use super::BarbeariaApi;
use crate::config::Config;
use crate::error::{api_error, config_error, DashboardResult};
use crate::models::{
    Appointment, AppointmentStatus, Barber, Barbershop, BarbershopUpdate, BusinessHoursPayload,
    Interval, NewBarber, NewInterval, NewService, Payment, Service, WeeklyScheduleEntry,
};
use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// REST client for the barbershop backend
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: Url,
}

#[derive(Serialize)]
struct StatusUpdate {
    status: AppointmentStatus,
}

impl HttpApiClient {
    /// Create a client for `base_url` with the given request timeout
    pub fn new(base_url: &str, timeout: Duration) -> DashboardResult<Self> {
        // Url::join drops the last path segment unless the base ends with '/'
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        let base_url = Url::parse(&normalized)
            .map_err(|e| config_error(&format!("Invalid API base URL {}: {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| config_error(&format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Create a client from the loaded configuration
    pub fn from_config(config: &Config) -> DashboardResult<Self> {
        Self::new(
            &config.api_base_url,
            Duration::from_secs(config.api_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a path relative to the base URL
    pub fn endpoint(&self, path: &str) -> DashboardResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| api_error(&format!("Failed to build URL for {}: {}", path, e)))
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> DashboardResult<Response> {
        let url = self.endpoint(path)?;
        debug!("{} {}", method, url);

        let mut request = self.client.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| api_error(&format!("{} {} failed: {}", method, path, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(api_error(&format!(
                "{} {} failed: HTTP {} - {}",
                method, path, status, error_body
            )));
        }

        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(path: &str, response: Response) -> DashboardResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| api_error(&format!("Failed to parse response from {}: {}", path, e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> DashboardResult<T> {
        let response = self.send::<()>(Method::GET, path, None).await?;
        Self::read_json(path, response).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> DashboardResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(method, path, Some(body)).await?;
        Self::read_json(path, response).await
    }

    /// GET a JSON array, dropping elements that fail to decode instead of the whole list
    async fn get_each<T: DeserializeOwned>(&self, path: &str) -> DashboardResult<Vec<T>> {
        let values: Vec<serde_json::Value> = self.get_json(path).await?;
        Ok(decode_each(path, values))
    }

    async fn send_ignoring_body<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> DashboardResult<()> {
        self.send(method, path, body).await.map(|_| ())
    }
}

fn decode_each<T: DeserializeOwned>(path: &str, values: Vec<serde_json::Value>) -> Vec<T> {
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping unreadable record from {}: {}", path, e);
                None
            }
        })
        .collect()
}

#[async_trait]
impl BarbeariaApi for HttpApiClient {
    async fn get_barbershop(&self, barbearia_id: u64) -> DashboardResult<Barbershop> {
        self.get_json(&format!("barbearias/{}", barbearia_id)).await
    }

    async fn update_barbershop(
        &self,
        barbearia_id: u64,
        update: &BarbershopUpdate,
    ) -> DashboardResult<Barbershop> {
        self.send_json(Method::PUT, &format!("barbearias/{}", barbearia_id), update)
            .await
    }

    async fn get_business_hours(
        &self,
        barbearia_id: u64,
    ) -> DashboardResult<Vec<WeeklyScheduleEntry>> {
        self.get_json(&format!("barbearias/{}/horarios", barbearia_id))
            .await
    }

    async fn update_business_hours(
        &self,
        barbearia_id: u64,
        hours: &[BusinessHoursPayload],
    ) -> DashboardResult<()> {
        self.send_ignoring_body(
            Method::PUT,
            &format!("barbearias/{}/horarios", barbearia_id),
            Some(hours),
        )
        .await
    }

    async fn list_barbers(&self, barbearia_id: u64) -> DashboardResult<Vec<Barber>> {
        self.get_json(&format!("barbearias/{}/barbeiros", barbearia_id))
            .await
    }

    async fn create_barber(&self, barber: &NewBarber) -> DashboardResult<Barber> {
        self.send_json(Method::POST, "barbeiros", barber).await
    }

    async fn update_barber(&self, barber_id: u64, barber: &NewBarber) -> DashboardResult<Barber> {
        self.send_json(Method::PUT, &format!("barbeiros/{}", barber_id), barber)
            .await
    }

    async fn remove_barber(&self, barber_id: u64) -> DashboardResult<()> {
        self.send_ignoring_body::<()>(Method::DELETE, &format!("barbeiros/{}", barber_id), None)
            .await
    }

    async fn list_services(&self, barbearia_id: u64) -> DashboardResult<Vec<Service>> {
        self.get_json(&format!("barbearias/{}/servicos", barbearia_id))
            .await
    }

    async fn create_service(&self, service: &NewService) -> DashboardResult<Service> {
        self.send_json(Method::POST, "servicos", service).await
    }

    async fn update_service(
        &self,
        service_id: u64,
        service: &NewService,
    ) -> DashboardResult<Service> {
        self.send_json(Method::PUT, &format!("servicos/{}", service_id), service)
            .await
    }

    async fn remove_service(&self, service_id: u64) -> DashboardResult<()> {
        self.send_ignoring_body::<()>(Method::DELETE, &format!("servicos/{}", service_id), None)
            .await
    }

    async fn list_appointments(&self, barbearia_id: u64) -> DashboardResult<Vec<Appointment>> {
        self.get_each(&format!("barbearias/{}/agendamentos", barbearia_id))
            .await
    }

    async fn update_appointment_status(
        &self,
        appointment_id: u64,
        status: AppointmentStatus,
    ) -> DashboardResult<()> {
        self.send_ignoring_body(
            Method::PUT,
            &format!("agendamentos/{}", appointment_id),
            Some(&StatusUpdate { status }),
        )
        .await
    }

    async fn list_intervals(&self, barbearia_id: u64) -> DashboardResult<Vec<Interval>> {
        self.get_json(&format!("barbearias/{}/intervalos", barbearia_id))
            .await
    }

    async fn create_interval(&self, interval: &NewInterval) -> DashboardResult<Interval> {
        self.send_json(Method::POST, "intervalos", interval).await
    }

    async fn update_interval(
        &self,
        interval_id: u64,
        interval: &NewInterval,
    ) -> DashboardResult<Interval> {
        self.send_json(Method::PUT, &format!("intervalos/{}", interval_id), interval)
            .await
    }

    async fn remove_interval(&self, interval_id: u64) -> DashboardResult<()> {
        self.send_ignoring_body::<()>(Method::DELETE, &format!("intervalos/{}", interval_id), None)
            .await
    }

    async fn list_payments(&self, barbearia_id: u64) -> DashboardResult<Vec<Payment>> {
        self.get_json(&format!("pagamentos/barbearia/{}", barbearia_id))
            .await
    }
}
