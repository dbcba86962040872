use anyhow::Result;
use httpmock::prelude::*;
use movie_ranker::{JsonFileStore, ListEngine, OmdbClient, RankedList};
use tempfile::TempDir;

fn engine_for(server: &MockServer, dir: &TempDir) -> Result<ListEngine<JsonFileStore, OmdbClient>> {
    let store = JsonFileStore::new(dir.path());
    let lookup = OmdbClient::new(&server.base_url(), "test-key")?;
    Ok(ListEngine::new(store, lookup))
}

#[tokio::test]
async fn add_persist_and_restore_round_trip() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).query_param("t", "Cinderella");
        then.status(200)
            .json_body(serde_json::json!({ "Poster": "http://img.example.com/cinderella.jpg" }));
    });
    server.mock(|when, then| {
        when.method(GET).query_param("t", "Dumbo");
        then.status(200).json_body(serde_json::json!({ "Poster": "N/A" }));
    });

    let dir = TempDir::new()?;
    {
        let engine = engine_for(&server, &dir)?;
        engine.restore().await?;
        engine.add_entry("Cinderella", Some(1950), 1, 8).await?;
        engine.add_entry("Dumbo", Some(1941), 2, 7).await?;
    }

    // A fresh engine over the same data directory sees the same list.
    let engine = engine_for(&server, &dir)?;
    engine.restore().await?;
    engine.wait_for_backfill().await;

    let entries = engine.entries().await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "Cinderella");
    assert_eq!(
        entries[0].poster.as_deref(),
        Some("http://img.example.com/cinderella.jpg")
    );
    assert_eq!(entries[1].title, "Dumbo");
    assert!(entries[1].poster.is_none());
    let ranks: Vec<u32> = entries.iter().map(|e| e.rank).collect();
    assert_eq!(ranks, vec![1, 2]);
    Ok(())
}

#[tokio::test]
async fn restore_backfills_poster_that_became_available() -> Result<()> {
    let server = MockServer::start();
    // First run: provider has nothing for the title.
    let mut miss_mock = server.mock(|when, then| {
        when.method(GET).query_param("t", "Encanto");
        then.status(200).json_body(serde_json::json!({ "Poster": "N/A" }));
    });

    let dir = TempDir::new()?;
    {
        let engine = engine_for(&server, &dir)?;
        engine.restore().await?;
        engine.add_entry("Encanto", Some(2021), 1, 8).await?;
        assert!(engine.entries().await[0].poster.is_none());
    }
    miss_mock.assert();
    miss_mock.delete();

    // Second run: the provider now knows the poster; backfill fills it in
    // and writes the enriched list back to disk.
    server.mock(|when, then| {
        when.method(GET).query_param("t", "Encanto");
        then.status(200)
            .json_body(serde_json::json!({ "Poster": "http://img.example.com/encanto.jpg" }));
    });

    let engine = engine_for(&server, &dir)?;
    engine.restore().await?;
    engine.wait_for_backfill().await;
    assert_eq!(
        engine.entries().await[0].poster.as_deref(),
        Some("http://img.example.com/encanto.jpg")
    );

    let blob = std::fs::read(dir.path().join("movies.json"))?;
    let persisted: RankedList = serde_json::from_slice(&blob)?;
    assert_eq!(
        persisted.entries()[0].poster.as_deref(),
        Some("http://img.example.com/encanto.jpg")
    );
    Ok(())
}

#[tokio::test]
async fn delete_persists_renumbered_list() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!({ "Poster": "N/A" }));
    });

    let dir = TempDir::new()?;
    {
        let engine = engine_for(&server, &dir)?;
        engine.restore().await?;
        engine.add_entry("First", None, 1, 5).await?;
        engine.add_entry("Second", None, 2, 6).await?;
        engine.add_entry("Third", None, 3, 7).await?;
        engine.delete_entry(1).await?;
    }

    let engine = engine_for(&server, &dir)?;
    engine.restore().await?;
    engine.wait_for_backfill().await;

    let entries = engine.entries().await;
    let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
    let ranks: Vec<u32> = entries.iter().map(|e| e.rank).collect();
    assert_eq!(titles, vec!["First", "Third"]);
    assert_eq!(ranks, vec![1, 2]);
    Ok(())
}
