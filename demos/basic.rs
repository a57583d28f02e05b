use statefetch::{CallOptions, ClientOptions, StatefetchClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let api = StatefetchClient::new(ClientOptions {
        base_url: "https://httpbin.org".to_owned(),
        retry: 2,
        ..Default::default()
    })?;

    let response = api.get("/json", ()).await?;
    println!("status: {}", response.status);
    println!("payload: {}", response.data);

    let echoed = api
        .post(
            "/anything",
            &serde_json::json!({"name": "Kit"}),
            CallOptions::new().query("verbose", "1"),
        )
        .await?;
    println!("echoed: {}", echoed.data);

    println!("cached: {:?}", api.last_data_pulled()?);
    println!("loading: {}", api.is_loading()?);

    Ok(())
}
