//! Job Endpoints
//!
//! CRUD over `/api/jobs/`. Failures carry a per-operation message and no
//! finer distinction (not found, validation, server error all look alike).

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;

use super::{ApiClient, ApiRequest, Transport};
use crate::error::{ApiError, ApiResult};
use crate::models::{Job, JobCreate};

pub const JOBS_PATH: &str = "/api/jobs/";

/// RFC 3986 unreserved characters stay as-is
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn job_path(id: &str) -> String {
    format!("{}{}", JOBS_PATH, utf8_percent_encode(id, PATH_SEGMENT))
}

fn json_body(payload: &JobCreate, action: &'static str) -> ApiResult<serde_json::Value> {
    serde_json::to_value(payload).map_err(|e| ApiError::Decode {
        action,
        message: e.to_string(),
    })
}

impl<T: Transport> ApiClient<T> {
    pub async fn create_job(&self, job: &JobCreate) -> ApiResult<Job> {
        const ACTION: &str = "create job";
        let request = ApiRequest::with_json(Method::POST, JOBS_PATH, json_body(job, ACTION)?);
        self.send(request).await?.json(ACTION)
    }

    pub async fn get_job(&self, id: &str) -> ApiResult<Job> {
        self.send(ApiRequest::get(job_path(id))).await?.json("fetch job")
    }

    pub async fn list_jobs(&self) -> ApiResult<Vec<Job>> {
        self.send(ApiRequest::get(JOBS_PATH)).await?.json("fetch jobs")
    }

    pub async fn update_job(&self, id: &str, job: &JobCreate) -> ApiResult<Job> {
        const ACTION: &str = "update job";
        let request = ApiRequest::with_json(Method::PUT, job_path(id), json_body(job, ACTION)?);
        self.send(request).await?.json(ACTION)
    }

    /// Success is signaled by status alone; any body is ignored
    pub async fn delete_job(&self, id: &str) -> ApiResult<()> {
        self.send(ApiRequest::delete(job_path(id)))
            .await?
            .ensure_success("delete job")
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::api::testing::FakeTransport;

    const JOB_JSON: &str =
        r#"{"id":"2LQ3y4fKzvP","name":"A","startDate":"2024-01-01","endDate":null}"#;

    fn new_job() -> JobCreate {
        JobCreate {
            name: "A".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
        }
    }

    #[test]
    fn test_job_path_encodes_segment() {
        assert_eq!(job_path("2LQ3y4fKzvP"), "/api/jobs/2LQ3y4fKzvP");
        assert_eq!(job_path("a/b c"), "/api/jobs/a%2Fb%20c");
    }

    #[tokio::test]
    async fn test_create_posts_payload() {
        let client = ApiClient::new(FakeTransport::default().respond(200, JOB_JSON));

        let job = client.create_job(&new_job()).await.unwrap();
        assert_eq!(job.id, "2LQ3y4fKzvP");
        assert!(job.is_open());

        let request = client.transport().last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/api/jobs/");
        assert_eq!(
            request.body,
            Some(serde_json::json!({"name": "A", "startDate": "2024-01-01", "endDate": null}))
        );
    }

    #[tokio::test]
    async fn test_create_rejects_non_2xx() {
        let client = ApiClient::new(FakeTransport::default().respond(422, r#"{"detail":[]}"#));
        let err = client.create_job(&new_job()).await.unwrap_err();
        assert_eq!(err, ApiError::Status { action: "create job", status: 422 });
    }

    #[tokio::test]
    async fn test_get_and_list() {
        let client = ApiClient::new(
            FakeTransport::default()
                .respond(200, JOB_JSON)
                .respond(200, &format!("[{}]", JOB_JSON)),
        );

        let job = client.get_job("2LQ3y4fKzvP").await.unwrap();
        assert_eq!(job.name, "A");
        assert_eq!(client.transport().last_request().path, "/api/jobs/2LQ3y4fKzvP");

        let jobs = client.list_jobs().await.unwrap();
        assert_eq!(jobs, vec![job]);
        assert_eq!(client.transport().last_request().path, "/api/jobs/");
    }

    #[tokio::test]
    async fn test_get_not_found_is_generic() {
        let client = ApiClient::new(
            FakeTransport::default().respond(404, r#"{"detail":"Job not found"}"#),
        );
        let err = client.get_job("missing").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch job");
    }

    #[tokio::test]
    async fn test_update_puts_to_job_path() {
        let client = ApiClient::new(FakeTransport::default().respond(200, JOB_JSON));
        client.update_job("2LQ3y4fKzvP", &new_job()).await.unwrap();

        let request = client.transport().last_request();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "/api/jobs/2LQ3y4fKzvP");
        assert!(request.body.is_some());
    }

    #[tokio::test]
    async fn test_delete_resolves_empty_on_2xx() {
        let client = ApiClient::new(FakeTransport::default().respond(200, "null"));
        assert_eq!(client.delete_job("2LQ3y4fKzvP").await, Ok(()));

        let request = client.transport().last_request();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.path, "/api/jobs/2LQ3y4fKzvP");
    }

    #[tokio::test]
    async fn test_delete_rejects_non_2xx() {
        let client = ApiClient::new(FakeTransport::default().respond(404, ""));
        let err = client.delete_job("gone").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to delete job");
    }
}
