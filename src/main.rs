mod auth;
mod config;
mod designs;
mod feed;
mod models;
mod notify;
mod render;

use crate::auth::{AuthState, SessionAuth};
use crate::config::FeedConfig;
use crate::designs::cards;
use crate::feed::card::{self, CardView};
use crate::feed::controller::FeedController;
use crate::feed::FeedError;
use crate::models::post::PostStore;
use crate::notify::{LogNotifier, NotificationKind, NotificationSink};

fn main() {
    env_logger::init();

    let as_json = std::env::args().any(|a| a == "--json");
    let config = FeedConfig::load("feed.toml");
    let store = PostStore::seeded();

    log::info!(
        "insightfeed: {} posts, {} per page",
        store.len(),
        config.posts_per_page
    );

    let notifier = LogNotifier;
    // Stand-in for the browser session; a real deployment would read this
    // from a cookie or token.
    let mut session = match std::env::var("INSIGHTFEED_ROLE") {
        Ok(role) => SessionAuth::signed_in(&role),
        Err(_) => SessionAuth::guest(),
    };
    let mut controller = FeedController::new(store, &config);

    match run(&mut controller, &config, &notifier, as_json) {
        Ok(()) => notifier.show("Feed rendered", NotificationKind::Success),
        Err(err) => {
            notifier.show(
                &format!("Could not sort the feed: {}", err),
                NotificationKind::Error,
            );
            let FeedError::InvalidDateFormat { post_id, .. } = &err;
            log::warn!(
                "falling back to collection order after bad date on post {}",
                post_id
            );
            let fallback: Vec<CardView> = controller
                .posts()
                .iter()
                .map(|p| card::render(p, &config.date_format))
                .collect();
            emit("All Posts", &fallback, &config, as_json);
        }
    }

    // The admin dashboard lives behind the auth seam; guests only ever see
    // the public feed.
    if session.is_authenticated() && session.role() == "admin" {
        let views: u64 = controller.posts().iter().map(|p| u64::from(p.views)).sum();
        log::info!("admin: {} total views across the collection", views);
    } else {
        log::debug!("no admin session, dashboard hidden");
    }

    session.sign_out();
}

fn run(
    controller: &mut FeedController,
    config: &FeedConfig,
    notifier: &dyn NotificationSink,
    as_json: bool,
) -> Result<(), FeedError> {
    let initial = controller.initial_load()?;
    emit("Featured Posts", &initial.featured_cards, config, as_json);
    emit("Latest Posts", &initial.latest_cards, config, as_json);
    if !as_json {
        println!("{}", cards::render_load_more(initial.has_more));
    }

    while controller.has_more() {
        let batch = controller.load_more()?;
        emit("More Posts", &batch.new_cards, config, as_json);
    }
    notifier.show("You're all caught up", NotificationKind::Info);
    Ok(())
}

fn emit(title: &str, batch: &[CardView], config: &FeedConfig, as_json: bool) {
    if as_json {
        match serde_json::to_string_pretty(batch) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("JSON dump failed: {}", e),
        }
    } else {
        println!("{}", cards::render_section(title, batch, config.excerpt_words));
    }
}
