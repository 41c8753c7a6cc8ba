//! Stub LCD shared by the integration tests.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use prismswap::{
    Network,
    client::LcdClient,
    price::PriceFetcher,
    types::{QueryMsg, Symbol},
};
use serde_json::{Value, json};
use url::Url;

/// Canned reply of the stub LCD.
#[derive(Clone)]
pub struct StubReply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl StubReply {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn offer_amount(amount: &str) -> Self {
        Self::ok(json!({"height": "7544910", "result": {"offer_amount": amount}}))
    }
}

#[derive(Clone)]
struct StubState {
    // Keyed by contract and normalized query message JSON
    replies: Arc<HashMap<(String, String), StubReply>>,
    hits: Arc<AtomicUsize>,
}

/// Local LCD serving `GET /wasm/contracts/{contract}/store` from canned replies.
pub struct StubLcd {
    pub url: Url,
    hits: Arc<AtomicUsize>,
}

impl StubLcd {
    pub async fn start(replies: Vec<(&str, QueryMsg, StubReply)>) -> Self {
        let replies = replies
            .into_iter()
            .map(|(contract, msg, reply)| ((contract.to_string(), msg.to_json().to_string()), reply))
            .collect();
        let state = StubState {
            replies: Arc::new(replies),
            hits: Arc::new(AtomicUsize::new(0)),
        };
        let hits = state.hits.clone();

        let app = Router::new()
            .route("/wasm/contracts/{contract}/store", get(store))
            .with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        Self {
            url: Url::parse(&format!("http://{addr}")).unwrap(),
            hits,
        }
    }

    pub fn fetcher(&self, timeout: Duration) -> PriceFetcher<LcdClient> {
        let client = LcdClient::new(&Network::custom(self.url.clone()), timeout).unwrap();
        PriceFetcher::new(client)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn store(
    State(state): State<StubState>,
    Path(contract): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let msg = params
        .get("query_msg")
        .and_then(|m| serde_json::from_str::<Value>(m).ok())
        .map(|m| m.to_string())
        .unwrap_or_default();
    let reply = state
        .replies
        .get(&(contract, msg))
        .cloned()
        .unwrap_or(StubReply {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({"code": 2, "message": "contract query failed"}).to_string(),
            delay: Duration::ZERO,
        });
    tokio::time::sleep(reply.delay).await;
    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}

pub fn simulation(symbol: Symbol, reply: StubReply) -> (&'static str, QueryMsg, StubReply) {
    let market = symbol.market();
    (
        market.pair,
        QueryMsg::reverse_simulation_one(market.asset),
        reply,
    )
}
