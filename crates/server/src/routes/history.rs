use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

use crate::state::AppState;
use crate::types::ErrorResponse;

/// Stored chat summaries, newest first
#[get("/history")]
pub async fn get_history(state: web::Data<Arc<AppState>>) -> actix_web::Result<HttpResponse> {
    let records = state.history.records().await;
    Ok(HttpResponse::Ok().json(records))
}

/// One stored summary by id
#[get("/history/{id}")]
pub async fn get_history_record(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> actix_web::Result<HttpResponse> {
    let id = path.into_inner();
    match state.history.get_by_id(&id).await {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Ok(HttpResponse::NotFound()
            .json(ErrorResponse::with_details("Summary not found", id))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::configure;
    use crate::routes::test_support::{state_with, FakeChat, LONG_TEXT};
    use actix_web::{test, App};
    use summarizer_llm::{SummaryOptions, SummaryRecord};

    #[actix_web::test]
    async fn test_history_lists_webhook_summaries() {
        let (state, _tmp) = state_with(FakeChat::replying("Rollback added."), Some("sk-test"));
        state
            .summarizer
            .process_telex_message(LONG_TEXT, "u7", "c7", &SummaryOptions::default())
            .await;

        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).configure(configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/history").to_request();
        let records: Vec<SummaryRecord> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id, "u7");
        assert_eq!(records[0].summary, "Rollback added.");

        let req = test::TestRequest::get()
            .uri(&format!("/api/history/{}", records[0].id))
            .to_request();
        let record: SummaryRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(record, records[0]);
    }

    #[actix_web::test]
    async fn test_history_record_unknown_id_is_404() {
        let (state, _tmp) = state_with(FakeChat::replying("unused"), None);
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/history/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
