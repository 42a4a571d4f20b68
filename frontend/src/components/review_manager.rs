//! The review manager page.
//!
//! Scrape reviews from the backend, show them with generated titles, and
//! upload the whole list back.
//!
//! All page state lives in one [`ReviewBoard`] signal; handlers call its
//! transitions before and after each request.

use leptos::ev::MouseEvent;
use leptos::*;

use super::ui::{Button, Card, CardContent, Input};
use super::{LogsPanel, ReviewCard};
use crate::services::{fetch_reviews, upload_reviews};
use crate::state::ReviewBoard;
use crate::{LogEntry, BACKEND_URL};

const ACTION_BUTTON: &str = "bg-gray-900 text-white hover:bg-gray-800 shadow-none rounded-2xl h-12 px-6";

#[component]
pub fn ReviewManager(
    /// Backend log stream
    logs: ReadSignal<Vec<LogEntry>>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let board = create_rw_signal(ReviewBoard::default());

    let scrape = move |_: MouseEvent| {
        if !board.with_untracked(ReviewBoard::can_scrape) {
            return;
        }
        board.update(ReviewBoard::begin_scrape);
        let source = board.with_untracked(|b| b.url.clone());

        spawn_local(async move {
            log::info!("🔍 Scraping reviews");
            let result = fetch_reviews(BACKEND_URL, &source).await;
            match &result {
                Ok(reviews) => log::info!("✅ {} reviews received", reviews.len()),
                Err(e) => log::error!("Scrape failed: {}", e),
            }
            board.update(|b| b.finish_scrape(result));
        });
    };

    let upload = move |_: MouseEvent| {
        if !board.with_untracked(ReviewBoard::can_upload) {
            return;
        }
        board.update(ReviewBoard::begin_upload);
        let reviews = board.with_untracked(|b| b.reviews.clone());

        spawn_local(async move {
            log::info!("📤 Uploading {} reviews", reviews.len());
            let result = upload_reviews(BACKEND_URL, &reviews).await;
            if let Err(e) = &result {
                log::error!("Upload failed: {}", e);
            }
            board.update(|b| b.finish_upload(result));
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 p-6">
            <Card class="w-full max-w-4xl bg-white rounded-3xl shadow-none">
                <CardContent class="p-8">
                    <h2 class="text-2xl font-semibold my-6">"Review Manager"</h2>

                    <div class="space-y-6">
                        // URL input
                        <div class="flex gap-4">
                            <Input
                                placeholder="Enter Google Reviews URL"
                                class="flex-1 border border-gray-200 bg-white shadow-sm rounded-2xl h-12"
                                value=Signal::derive(move || board.with(|b| b.url.clone()))
                                on_input=Callback::new(move |url: String| board.update(|b| b.set_url(url)))
                            />
                            <Button
                                class=ACTION_BUTTON
                                on_click=Callback::new(scrape)
                                disabled=Signal::derive(move || board.with(|b| !b.can_scrape()))
                            >
                                {move || {
                                    if board.with(|b| b.loading) {
                                        "⏳ Scraping..."
                                    } else {
                                        "🔍 Scrape Reviews"
                                    }
                                }}
                            </Button>
                        </div>

                        // Status messages
                        {move || {
                            board
                                .with(|b| b.error.clone())
                                .map(|error| view! {
                                    <div class="bg-red-50 text-red-500 p-4 rounded-2xl">{error}</div>
                                })
                        }}
                        {move || {
                            board
                                .with(|b| b.visible_status().map(str::to_string))
                                .map(|status| view! {
                                    <div class="bg-blue-50 text-blue-500 p-4 rounded-2xl">{status}</div>
                                })
                        }}

                        // Reviews
                        <Show when=move || board.with(|b| !b.reviews.is_empty())>
                            <div class="space-y-4">
                                <div class="flex justify-between items-center">
                                    <h3 class="text-xl font-semibold">
                                        "Scraped Reviews (" {move || board.with(|b| b.reviews.len())} ")"
                                    </h3>
                                    <Button
                                        class=ACTION_BUTTON
                                        on_click=Callback::new(upload)
                                        disabled=Signal::derive(move || board.with(|b| !b.can_upload()))
                                    >
                                        {move || {
                                            if board.with(|b| b.uploading) {
                                                "⏳ Uploading..."
                                            } else {
                                                "📤 Upload All Reviews"
                                            }
                                        }}
                                    </Button>
                                </div>

                                <div class="space-y-4">
                                    <For
                                        each=move || board.with(|b| b.reviews.clone()).into_iter().enumerate()
                                        key=|(i, review)| (*i, review.username.clone(), review.content.clone())
                                        children=|(_, review)| view! { <ReviewCard review=review/> }
                                    />
                                </div>
                            </div>
                        </Show>

                        <Show when=move || !logs.with(Vec::is_empty)>
                            <LogsPanel logs=logs set_logs=set_logs/>
                        </Show>
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}
