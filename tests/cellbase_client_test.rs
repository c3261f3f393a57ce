use cellbase_client::{response_results, CellBaseClient, ClientConfig, Options};
use httpmock::prelude::*;
use serde_json::json;

const BASE: &str = "/webservices/rest/v5/hsapiens";

#[tokio::test]
async fn test_gene_transcript_end_to_end() -> anyhow::Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("{BASE}/feature/gene/transcript/BRCA2,TP53"))
            .query_param("exclude", "exons");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "response": [
                    {"id": "BRCA2", "numResults": 2, "numTotalResults": 2,
                     "result": [{"id": "ENST00000380152"}, {"id": "ENST00000544455"}]},
                    {"id": "TP53", "numResults": 1, "numTotalResults": 1,
                     "result": [{"id": "ENST00000269305"}]}
                ]
            }));
    });

    let cellbase = CellBaseClient::new(ClientConfig::default().with_host(server.base_url()))?;
    let body = cellbase
        .gene()
        .get_transcript(["BRCA2", "TP53"], &Options::new().exclude(&["exons"]))
        .await?;

    api_mock.assert();

    let responses = response_results(&body)?;
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].id.as_deref(), Some("BRCA2"));
    assert_eq!(responses[0].result.len(), 2);
    assert_eq!(responses[1].result[0]["id"], "ENST00000269305");
    Ok(())
}

#[tokio::test]
async fn test_genomic_region_endpoints_hit_one_url_each() -> anyhow::Result<()> {
    let server = MockServer::start();
    let region = "13:32315474-32400266";

    let mocks: Vec<_> = [
        "gene",
        "transcript",
        "variation",
        "sequence",
        "regulatory",
        "tfbs",
        "conservation",
    ]
    .iter()
    .map(|resource| {
        let path = format!("{BASE}/genomic/region/{resource}/{region}");
        server.mock(move |when, then| {
            when.method(GET).path(path);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"response": [{"id": region, "result": []}]}));
        })
    })
    .collect();

    let cellbase = CellBaseClient::new(ClientConfig::default().with_host(server.base_url()))?;
    let regions = cellbase.genomic_region();
    let options = Options::new();

    regions.get_gene(region, &options).await?;
    regions.get_transcript(region, &options).await?;
    regions.get_variation(region, &options).await?;
    regions.get_sequence(region, &options).await?;
    regions.get_regulatory(region, &options).await?;
    regions.get_tfbs(region, &options).await?;
    regions.get_conservation(region, &options).await?;

    for mock in &mocks {
        mock.assert_hits(1);
    }
    Ok(())
}

#[tokio::test]
async fn test_variation_next_end_to_end() -> anyhow::Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("{BASE}/feature/variation/next/rs6025"));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"response": [{"id": "rs6025", "result": [{"id": "rs6026"}]}]}));
    });

    let cellbase = CellBaseClient::new(ClientConfig::default().with_host(server.base_url()))?;
    let body = cellbase.variation().get_next("rs6025", &Options::new()).await?;

    api_mock.assert();
    assert_eq!(body["response"][0]["result"][0]["id"], "rs6026");
    Ok(())
}

#[tokio::test]
async fn test_server_error_propagates() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path(format!("{BASE}/feature/protein/next/P51587"));
        then.status(500);
    });

    let cellbase = CellBaseClient::new(ClientConfig::default().with_host(server.base_url())).unwrap();
    let result = cellbase.protein().get_next("P51587", &Options::new()).await;

    api_mock.assert();
    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("HTTP 500"));
}
