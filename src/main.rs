#[tokio::main]
async fn main() {
    campus_backend::run().await;
}
