use crate::errors::AppError;
use crate::filter::{self, ReadingFilter};
use crate::models::{
    NewReadingRequest, RangeQuery, Reading, ReadingView, ReadingsResponse, SettingsRequest,
    SettingsResponse, TestMessageRequest, TestMessageResponse,
};
use crate::notify;
use crate::report::render_report;
use crate::state::AppState;
use crate::stats::compute_stats;
use crate::status;
use crate::ui::render_index;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{Html, IntoResponse};
use chrono::{Duration, Local};
use std::convert::Infallible;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use uuid::Uuid;

pub async fn index() -> Html<String> {
    let today = Local::now().date_naive();
    let week_ago = today - Duration::days(7);
    Html(render_index(&today.to_string(), &week_ago.to_string()))
}

pub async fn list_readings(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<ReadingsResponse>, AppError> {
    let filter = ReadingFilter::from_query(&query)?;
    let store = state.readings.lock().await;
    let selected = filter::filter_readings(store.readings(), &filter);
    let stats = compute_stats(&selected);

    Ok(Json(ReadingsResponse {
        stats,
        label: filter.label(),
        readings: selected.into_iter().map(to_view).collect(),
    }))
}

pub async fn add_reading(
    State(state): State<AppState>,
    Json(payload): Json<NewReadingRequest>,
) -> Result<(StatusCode, Json<ReadingView>), AppError> {
    let reading = build_reading(payload)?;

    {
        let mut store = state.readings.lock().await;
        store.add(reading.clone()).await?;
    }

    let chat_id = state.settings.lock().await.chat_id();
    notify::spawn_reading_alert(state.notifier.clone(), chat_id, reading.clone());

    Ok((StatusCode::CREATED, Json(to_view(reading))))
}

pub async fn delete_reading(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.readings.lock().await;
    if store.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("no reading with that id"))
    }
}

pub async fn export_report(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = ReadingFilter::from_query(&query)?;
    let selected = {
        let store = state.readings.lock().await;
        filter::filter_readings(store.readings(), &filter)
    };
    let stats = compute_stats(&selected);
    let generated_at = Local::now();
    let bytes = render_report(&selected, stats, &filter.label(), generated_at)?;

    let filename = format!("GlucoseReport_{}.pdf", generated_at.format("%Y-%m-%d"));
    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, bytes))
}

pub async fn get_settings(State(state): State<AppState>) -> Json<SettingsResponse> {
    let settings = state.settings.lock().await;
    Json(SettingsResponse {
        telegram_chat_id: settings.chat_id(),
        notifier_configured: state.notifier.is_configured(),
    })
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<SettingsRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    let mut settings = state.settings.lock().await;
    settings.set_chat_id(payload.telegram_chat_id).await?;

    Ok(Json(SettingsResponse {
        telegram_chat_id: settings.chat_id(),
        notifier_configured: state.notifier.is_configured(),
    }))
}

pub async fn send_test_message(
    State(state): State<AppState>,
    Json(payload): Json<TestMessageRequest>,
) -> Json<TestMessageResponse> {
    let chat_id = payload.chat_id.trim();
    if chat_id.is_empty() {
        return Json(TestMessageResponse {
            ok: false,
            error: Some("chat id is required".to_string()),
        });
    }

    match state.notifier.send_test_message(chat_id).await {
        Ok(()) => Json(TestMessageResponse {
            ok: true,
            error: None,
        }),
        Err(err) => Json(TestMessageResponse {
            ok: false,
            error: Some(err.to_string()),
        }),
    }
}

pub async fn events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.readings.lock().await.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|event| {
        let event = event.ok()?;
        let payload = Event::default().event("store").json_data(&event).ok()?;
        Some(Ok::<Event, Infallible>(payload))
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}

fn build_reading(payload: NewReadingRequest) -> Result<Reading, AppError> {
    if payload.value == 0 {
        return Err(AppError::bad_request("value must be a positive number"));
    }
    let timestamp = filter::timestamp_ms(&payload.date, &payload.time)
        .ok_or_else(|| AppError::bad_request("invalid date or time"))?;

    Ok(Reading {
        id: Uuid::new_v4().to_string(),
        date: payload.date,
        time: payload.time,
        value: payload.value,
        reading_type: payload.reading_type,
        timestamp,
    })
}

fn to_view(reading: Reading) -> ReadingView {
    ReadingView {
        status: status::classify(reading.value, reading.reading_type),
        id: reading.id,
        date: reading.date,
        time: reading.time,
        value: reading.value,
        reading_type: reading.reading_type,
        timestamp: reading.timestamp,
    }
}
