use mongodb::Client;

/// Check MongoDB health with a lightweight server round-trip.
pub async fn check_health(client: &Client) -> bool {
    client.list_database_names().await.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_check_health() {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        assert!(check_health(&client).await);
    }
}
