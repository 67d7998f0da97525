//! Payments Gateway Client
//!
//! A client for the payments gateway, allowing for payment listing and
//! status updates.

use crate::consts::cli_consts::http;
use crate::environment::Environment;
use crate::gateway::Gateway;
use crate::gateway::error::GatewayError;
use crate::payments::{PaymentRecord, PaymentStatus};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

// User-Agent string with console version
const USER_AGENT: &str = concat!("gateway-admin/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    environment: Environment,
}

impl GatewayClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.gateway_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, GatewayError> {
        serde_json::from_slice(bytes).map_err(GatewayError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, GatewayError> {
        if !response.status().is_success() {
            return Err(GatewayError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, GatewayError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn put_request_no_response(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<(), GatewayError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .put(&url)
            .header("User-Agent", USER_AGENT)
            .json(&body)
            .send()
            .await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Gateway for GatewayClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    /// List one page of payment records, in gateway order.
    async fn list_payments(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Vec<PaymentRecord>, GatewayError> {
        let endpoint = format!("payments?limit={}&page={}", limit, page);
        self.get_request(&endpoint).await
    }

    /// Fetch a snapshot of up to `limit` payment records for stats derivation.
    async fn list_all(&self, limit: u32) -> Result<Vec<PaymentRecord>, GatewayError> {
        let endpoint = format!("payments?limit={}", limit);
        self.get_request(&endpoint).await
    }

    /// Set the status of a single payment.
    async fn set_status(
        &self,
        payment_id: &str,
        status: PaymentStatus,
    ) -> Result<(), GatewayError> {
        let id_path = urlencoding::encode(payment_id).into_owned();
        let endpoint = format!("payments/{}", id_path);
        self.put_request_no_response(&endpoint, json!({ "status": status }))
            .await
    }
}

#[cfg(test)]
/// These are ignored by default since they require a live gateway to run.
mod live_gateway_tests {
    use crate::environment::Environment;
    use crate::gateway::Gateway;
    use crate::payments::PaymentStatus;

    #[tokio::test]
    #[ignore] // This test requires a live gateway instance.
    /// Should list the first page of payments.
    async fn test_list_payments() {
        let client = super::GatewayClient::new(Environment::Local);
        match client.list_payments(1, 10).await {
            Ok(records) => println!("Got {} payments", records.len()),
            Err(e) => panic!("Failed to list payments: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live gateway instance.
    /// Should fetch a full snapshot for stats derivation.
    async fn test_list_all_snapshot() {
        let client = super::GatewayClient::new(Environment::Local);
        match client.list_all(9999).await {
            Ok(records) => println!("Snapshot holds {} payments", records.len()),
            Err(e) => panic!("Failed to fetch snapshot: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live gateway instance.
    /// Updating a payment that does not exist should fail with an HTTP error.
    async fn test_set_status_unknown_payment() {
        let client = super::GatewayClient::new(Environment::Local);
        let result = client
            .set_status("does-not-exist", PaymentStatus::Approved)
            .await;
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Base URLs and endpoints should join with exactly one slash.
    fn test_build_url_joins_cleanly() {
        let client = GatewayClient::new(Environment::Custom {
            gateway_url: "http://localhost:4000/".to_string(),
        });
        assert_eq!(
            client.build_url("/payments"),
            "http://localhost:4000/payments"
        );
        assert_eq!(
            client.build_url("payments?limit=10&page=2"),
            "http://localhost:4000/payments?limit=10&page=2"
        );
    }

    #[test]
    /// Payment ids are percent-encoded before landing in the path.
    fn test_payment_id_is_encoded() {
        let encoded = urlencoding::encode("pay/../etc").into_owned();
        assert_eq!(encoded, "pay%2F..%2Fetc");
    }

    #[test]
    /// A gateway response body should decode into payment records.
    fn test_decode_response_parses_payment_array() {
        let body = r#"[
            {"id": "pay_1", "order_id": "ord_1", "amount": 12.5, "method": "pix", "status": "PENDING"},
            {"id": "pay_2", "order_id": "ord_2", "amount": "99.00", "method": "boleto", "status": "APPROVED"}
        ]"#;

        let records: Vec<PaymentRecord> =
            GatewayClient::decode_response(body.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, PaymentStatus::Pending);
        assert_eq!(records[1].amount, 99.0);
    }

    #[test]
    /// Garbage bytes should surface as a decode error.
    fn test_decode_response_rejects_garbage() {
        let result: Result<Vec<PaymentRecord>, GatewayError> =
            GatewayClient::decode_response(b"<html>oops</html>");
        assert!(matches!(result, Err(GatewayError::Decode(_))));
    }
}
