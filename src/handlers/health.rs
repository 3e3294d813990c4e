/// GET / - Health banner, independent of configuration
pub async fn health() -> &'static str {
    "✅ vidurl backend is running."
}
