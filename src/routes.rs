// Route definitions

use std::convert::Infallible;
use std::sync::Arc;

use warp::Filter;

use crate::handlers;
use crate::llm::ChatProvider;
use crate::store::Store;

/// Compose the full API surface
pub fn configure_routes(
    store: Store,
    provider: Arc<dyn ChatProvider>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    product_routes(store.clone())
        .or(lead_routes(store.clone()))
        .or(analytics_routes(store))
        .or(ai_routes(provider))
}

fn with_store(store: Store) -> impl Filter<Extract = (Store,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}

fn with_provider(
    provider: Arc<dyn ChatProvider>,
) -> impl Filter<Extract = (Arc<dyn ChatProvider>,), Error = Infallible> + Clone {
    warp::any().map(move || provider.clone())
}

fn product_routes(
    store: Store,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let base = warp::path("api").and(warp::path("products"));

    // GET /api/products
    let list = base
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers::products::list_products);

    // GET /api/products/{id}
    let get = base
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers::products::get_product);

    // POST /api/products
    let create = base
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers::products::create_product);

    // PUT /api/products/{id}
    let update = base
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::put())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers::products::update_product);

    // DELETE /api/products/{id}
    let delete = base
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::delete())
        .and(with_store(store))
        .and_then(handlers::products::delete_product);

    list.or(get).or(create).or(update).or(delete)
}

fn lead_routes(
    store: Store,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let base = warp::path("api").and(warp::path("leads"));

    // GET /api/leads
    let list = base
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers::leads::list_leads);

    // GET /api/leads/{id}
    let get = base
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers::leads::get_lead);

    // POST /api/leads
    let create = base
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers::leads::create_lead);

    // PUT /api/leads/{id}
    let update = base
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::put())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers::leads::update_lead);

    // DELETE /api/leads/{id}
    let delete = base
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::delete())
        .and(with_store(store))
        .and_then(handlers::leads::delete_lead);

    list.or(get).or(create).or(update).or(delete)
}

fn analytics_routes(
    store: Store,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let base = warp::path("api").and(warp::path("analytics"));

    // GET /api/analytics
    let summary = base
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers::analytics::get_summary);

    // POST /api/analytics/track
    let track = base
        .and(warp::path("track"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_store(store))
        .and_then(handlers::analytics::track_event);

    summary.or(track)
}

/// Generation endpoints; separated so they can be served (and tested)
/// without a store
pub fn ai_routes(
    provider: Arc<dyn ChatProvider>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let base = warp::path("api").and(warp::path("ai"));

    // POST /api/ai/generate-description
    let description = base
        .and(warp::path("generate-description"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_provider(provider.clone()))
        .and_then(handlers::generate::generate_description);

    // POST /api/ai/generate-ad-copy
    let ad_copy = base
        .and(warp::path("generate-ad-copy"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_provider(provider.clone()))
        .and_then(handlers::generate::generate_ad_copy);

    // POST /api/ai/suggest-price
    let price = base
        .and(warp::path("suggest-price"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_provider(provider.clone()))
        .and_then(handlers::generate::suggest_price);

    // POST /api/ai/campaign-ideas
    let campaign = base
        .and(warp::path("campaign-ideas"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_provider(provider))
        .and_then(handlers::generate::campaign_ideas);

    description.or(ad_copy).or(price).or(campaign)
}
