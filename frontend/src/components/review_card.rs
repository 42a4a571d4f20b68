//! One scraped review, as shown in the list.

use leptos::*;

use super::ui::{Card, CardContent, CardHeader, CardTitle};
use crate::Review;

/// "By {author} • {date}"
pub fn byline(review: &Review) -> String {
    format!("By {} • {}", review.author, review.date)
}

#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    let byline = byline(&review);

    view! {
        <Card class="border-gray-200 rounded-3xl bg-white shadow-none">
            <CardHeader class="pb-3">
                <CardTitle class="text-xl leading-normal">{review.title}</CardTitle>
                <div class="text-gray-500">{byline}</div>
            </CardHeader>
            <CardContent>
                <p class="text-gray-800 text-lg">{review.content}</p>
            </CardContent>
        </Card>
    }
}
