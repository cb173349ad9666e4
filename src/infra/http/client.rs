use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};

use crate::domain::entities::person::{PersonId, PersonRecord, SearchQuery};
use crate::usecase::ports::people_api::{ApiError, PeopleApi};

const JSON: &str = "application/json";

pub struct HttpPeopleApi {
    client: Client,
    base: Url,
}

impl HttpPeopleApi {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base =
            Url::parse(base_url).with_context(|| format!("invalid base url: {base_url}"))?;
        if base.cannot_be_a_base() {
            bail!("base url cannot carry a path: {base_url}");
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = Client::builder()
            .build()
            .context("failed to build http client")?;

        Ok(Self { client, base })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn list_url(&self) -> Url {
        let mut url = self.endpoint(&["home", "people"]);
        url.query_pairs_mut().append_pair("format", "json");
        url
    }

    fn search_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.endpoint(&["home", "people"]);
        url.query_pairs_mut()
            .append_pair("query", &query.text)
            .append_pair("field", query.field.as_param())
            .append_pair("format", "json");
        url
    }

    fn delete_url(&self, id: PersonId) -> Url {
        self.endpoint(&["home", "api", "delete", &id.to_string()])
    }

    async fn fetch_people(&self, url: Url) -> Result<Vec<PersonRecord>, ApiError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, JSON)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if let Some(err) = status_error(response.status()) {
            return Err(err);
        }

        response
            .json::<Vec<PersonRecord>>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

fn status_error(status: StatusCode) -> Option<ApiError> {
    if status.is_success() {
        return None;
    }
    Some(ApiError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
    })
}

#[async_trait(?Send)]
impl PeopleApi for HttpPeopleApi {
    async fn list_all(&self) -> Result<Vec<PersonRecord>, ApiError> {
        self.fetch_people(self.list_url()).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<PersonRecord>, ApiError> {
        self.fetch_people(self.search_url(query)).await
    }

    async fn delete_by_id(&self, id: PersonId) -> Result<String, ApiError> {
        let response = self
            .client
            .delete(self.delete_url(id))
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if let Some(err) = status_error(response.status()) {
            return Err(err);
        }

        response
            .text()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::net::SocketAddr;

    use axum::extract::{Path, Query};
    use axum::http::{header, HeaderMap, StatusCode as AxumStatus};
    use axum::response::{IntoResponse, Response};
    use axum::routing::{delete, get};
    use axum::{Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;

    use super::*;
    use crate::domain::entities::person::SearchField;

    async fn people(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Response {
        let accepts_json = headers
            .get(header::ACCEPT)
            .and_then(|value| value.to_str().ok())
            == Some(JSON);
        if !accepts_json || params.get("format").map(String::as_str) != Some("json") {
            return AxumStatus::NOT_ACCEPTABLE.into_response();
        }

        match (params.get("query"), params.get("field")) {
            (Some(query), Some(field)) => Json(json!([
                { "id": 7, "name": query, "surname": field, "email": "x@example.com", "age": 30 }
            ]))
            .into_response(),
            _ => Json(json!([
                { "id": 1, "name": "Ann", "surname": "Lee", "email": "ann@example.com", "age": 41 },
                { "id": 2, "name": "Bob", "surname": "Ray", "email": null, "age": null }
            ]))
            .into_response(),
        }
    }

    async fn remove(Path(id): Path<i64>) -> Response {
        if id == 404 {
            return AxumStatus::NOT_FOUND.into_response();
        }
        format!("Deleted {id}").into_response()
    }

    async fn serve() -> SocketAddr {
        let app = Router::new()
            .route("/home/people", get(people))
            .route("/home/api/delete/{id}", delete(remove))
            .route(
                "/broken/home/people",
                get(|| async { AxumStatus::INTERNAL_SERVER_ERROR }),
            )
            .route("/garbled/home/people", get(|| async { "<html>oops</html>" }));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn api(base: &str) -> HttpPeopleApi {
        HttpPeopleApi::new(base).expect("client should build")
    }

    #[test]
    fn list_url_requests_json() {
        assert_eq!(
            api("http://localhost:8080").list_url().as_str(),
            "http://localhost:8080/home/people?format=json"
        );
    }

    #[test]
    fn search_url_encodes_text_and_field() {
        let query = SearchQuery {
            text: "o'neil & co/x".to_string(),
            field: SearchField::Surname,
        };

        assert_eq!(
            api("http://localhost:8080/").search_url(&query).as_str(),
            "http://localhost:8080/home/people?query=o%27neil+%26+co%2Fx&field=Surname&format=json"
        );
    }

    #[test]
    fn delete_url_carries_id() {
        assert_eq!(
            api("https://people.example.com").delete_url(PersonId(42)).as_str(),
            "https://people.example.com/home/api/delete/42"
        );
    }

    #[test]
    fn base_path_prefix_is_kept() {
        assert_eq!(
            api("http://example.com/app").list_url().as_str(),
            "http://example.com/app/home/people?format=json"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(HttpPeopleApi::new("not a url").is_err());
        assert!(HttpPeopleApi::new("mailto:someone@example.com").is_err());
    }

    #[test]
    fn only_success_statuses_pass() {
        assert_eq!(status_error(StatusCode::OK), None);
        assert_eq!(status_error(StatusCode::NO_CONTENT), None);
        assert_eq!(
            status_error(StatusCode::NOT_FOUND),
            Some(ApiError::Status {
                status: 404,
                reason: "Not Found".to_string(),
            })
        );
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR),
            Some(ApiError::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn list_all_decodes_people_from_server() {
        let addr = serve().await;
        let people = api(&format!("http://{addr}"))
            .list_all()
            .await
            .expect("listing should succeed");

        assert_eq!(people.len(), 2);
        assert_eq!(people[0].id, PersonId(1));
        assert_eq!(people[0].age, Some(41));
        assert_eq!(people[1].name, "Bob");
        assert_eq!(people[1].email, "");
        assert_eq!(people[1].age, None);
    }

    #[tokio::test]
    async fn search_sends_query_and_field() {
        let addr = serve().await;
        let query = SearchQuery {
            text: "ann lee".to_string(),
            field: SearchField::Name,
        };
        let people = api(&format!("http://{addr}"))
            .search(&query)
            .await
            .expect("search should succeed");

        assert_eq!(people.len(), 1);
        assert_eq!(people[0].name, "ann lee");
        assert_eq!(people[0].surname, "Name");
    }

    #[tokio::test]
    async fn server_error_maps_to_status() {
        let addr = serve().await;
        let err = api(&format!("http://{addr}/broken"))
            .list_all()
            .await
            .expect_err("500 should fail");

        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                reason: "Internal Server Error".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn non_json_body_maps_to_decode() {
        let addr = serve().await;
        let err = api(&format!("http://{addr}/garbled"))
            .list_all()
            .await
            .expect_err("html body should not decode");

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn delete_returns_body_text() {
        let addr = serve().await;
        let client = api(&format!("http://{addr}"));

        assert_eq!(
            client.delete_by_id(PersonId(42)).await,
            Ok("Deleted 42".to_string())
        );
        assert!(matches!(
            client.delete_by_id(PersonId(404)).await,
            Err(ApiError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn unreachable_server_maps_to_transport() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = api(&format!("http://{addr}"))
            .list_all()
            .await
            .expect_err("closed port should fail");

        assert!(matches!(err, ApiError::Transport(_)));
    }
}
