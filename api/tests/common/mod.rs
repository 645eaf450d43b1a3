#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use mealmint_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use test_context::AsyncTestContext;

pub const MAX_IMAGE_BYTES: usize = 4096;

/// Server wired with the sample menu extractor and the greedy planner.
pub struct ApiContext {
    pub server: TestServer,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let max_image_bytes = MAX_IMAGE_BYTES.to_string();
        let args = Args::parse_from([
            "mealmint-api",
            "--llm-mode",
            "mock",
            "--metrics",
            "false",
            "--root-path",
            "",
            "--max-image-bytes",
            max_image_bytes.as_str(),
        ]);

        let app = router(state(Arc::new(args))).expect("router");
        let server = TestServer::new(app).expect("test server");

        Self { server }
    }
}

pub fn session_header() -> HeaderName {
    HeaderName::from_static("x-session-id")
}

pub fn session(value: &'static str) -> HeaderValue {
    HeaderValue::from_static(value)
}

pub fn menu_photo() -> Part {
    Part::bytes(vec![0xFFu8, 0xD8, 0xFF, 0xE0, 1, 2, 3, 4])
        .file_name("menu.jpg")
        .mime_type("image/jpeg")
}

pub fn recommend_form(budget: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("budget", budget.to_string())
        .add_part("image", menu_photo())
}
