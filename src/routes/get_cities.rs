use crate::{types::app_state::AppState, utils::app_error::AppError};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use tracing::error;

#[cfg_attr(test, debug_handler)]
pub async fn get_cities(State(state): State<AppState>) -> Result<Response, AppError> {
    let cities = state.tago_service.get_cities().await.map_err(|e| {
        error!("Failed to fetch city codes: {}", e);
        AppError::from(e)
    })?;

    Ok((StatusCode::OK, Json(cities)).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use mockito::Matcher;
    use serde_json::json;
    use tower::ServiceExt;
    use tracing_test::traced_test;

    use crate::{
        app::gen_mock_app,
        services::tago_service::tago_service::ResponseFormat,
        types::location_record::CityCode,
        utils::app_error::ErrorResponseJson,
    };

    const CITIES_PATH: &str = "/1613000/BusLcInfoInqireService/getCtyCodeList";

    fn get() -> Request<Body> {
        Request::builder()
            .uri("/api/cities")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    #[traced_test]
    async fn get_response() {
        let mut mock_app = gen_mock_app(Some("key"), ResponseFormat::Json).await;

        let mock_server = mock_app
            .tago_server
            .mock("GET", CITIES_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("serviceKey".into(), "key".into()),
                Matcher::UrlEncoded("_type".into(), "json".into()),
            ]))
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "response": {
                        "header": { "resultCode": "00", "resultMsg": "NORMAL SERVICE." },
                        "body": { "items": { "item": [
                            { "citycode": 37010, "cityname": "포항시" },
                            { "citycode": "25", "cityname": "대전광역시" }
                        ] } }
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let response = mock_app.app.oneshot(get()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        mock_server.assert_async().await;

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Vec<CityCode> = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            body,
            vec![
                CityCode {
                    citycode: "37010".to_string(),
                    cityname: "포항시".to_string(),
                },
                CityCode {
                    citycode: "25".to_string(),
                    cityname: "대전광역시".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    #[traced_test]
    async fn single_city_from_xml() {
        let mut mock_app = gen_mock_app(Some("key"), ResponseFormat::Xml).await;

        mock_app
            .tago_server
            .mock("GET", CITIES_PATH)
            .match_query(Matcher::Any)
            .with_header("content-type", "application/xml")
            .with_body(
                "<response><body><items><item>\
                 <citycode>12</citycode><cityname>세종특별시</cityname>\
                 </item></items></body></response>",
            )
            .create_async()
            .await;

        let response = mock_app.app.oneshot(get()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Vec<CityCode> = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.len(), 1);
        assert_eq!(body[0].citycode, "12");
        assert_eq!(body[0].cityname, "세종특별시");
    }

    #[tokio::test]
    #[traced_test]
    async fn missing_service_key() {
        let mut mock_app = gen_mock_app(None, ResponseFormat::Json).await;

        let mock_server = mock_app
            .tago_server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let response = mock_app.app.oneshot(get()).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        mock_server.assert_async().await;
    }

    #[tokio::test]
    #[traced_test]
    async fn upstream_failure() {
        let mut mock_app = gen_mock_app(Some("key"), ResponseFormat::Json).await;

        mock_app
            .tago_server
            .mock("GET", CITIES_PATH)
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let response = mock_app.app.oneshot(get()).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponseJson = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.status, Some(500));
    }
}
