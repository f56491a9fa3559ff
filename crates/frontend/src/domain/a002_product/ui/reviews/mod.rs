use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::usecases::u501_sentiment_analysis::api::analyze_text;
use crate::usecases::use_service_clients;
use contracts::domain::a002_product::aggregate::{Review, ReviewId};
use contracts::usecases::u501_sentiment_analysis::{ReviewSentiments, SentimentLabel, SentimentResult};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::{Button, ButtonAppearance};

fn label_class(label: &SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "sentiment sentiment--positive",
        SentimentLabel::Negative => "sentiment sentiment--negative",
        _ => "sentiment sentiment--neutral",
    }
}

fn sentiment_view(result: SentimentResult) -> impl IntoView {
    view! {
        <div class="review-card__sentiment">
            <span class="sentiment__emoji">{result.sentiment.emoji()}</span>
            <span class=label_class(&result.sentiment)>{result.sentiment.as_str().to_string()}</span>
            <span class="sentiment__confidence">
                {format!("(Confidence: {})", result.confidence_display())}
            </span>
        </div>
    }
}

/// Reviews of one product with their sentiment.
///
/// `sentiments` belongs to the products page; results are never written to a
/// store.
#[component]
pub fn ProductReviews(
    product_name: String,
    reviews: Vec<Review>,
    sentiments: RwSignal<ReviewSentiments>,
    /// The batch request for this product is still running
    #[prop(into)]
    batch_pending: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let services = use_service_clients();
    let toasts = use_toasts();
    let analysing = RwSignal::new(HashSet::<ReviewId>::new());

    let analyse_one = move |id: ReviewId, text: String| {
        analysing.update(|s| {
            s.insert(id);
        });
        spawn_local(async move {
            let client = services.sentiment.get_value();
            let result = analyze_text(&client, &text).await;
            analysing.update(|s| {
                s.remove(&id);
            });
            match result {
                Ok(sentiment) => sentiments.update(|m| {
                    m.insert(id, sentiment);
                }),
                Err(e) => toasts.error(format!("Sentiment analysis failed: {}", e)),
            }
        });
    };

    let cards = reviews
        .into_iter()
        .map(|review| {
            let id = review.id;
            let comment = review.comment.clone();
            let status = move || match sentiments.with(|m| m.get(&id).cloned()) {
                Some(result) => sentiment_view(result).into_any(),
                None if batch_pending.get() || analysing.with(|s| s.contains(&id)) => view! {
                    <p class="review-card__pending">"Analyzing sentiment..."</p>
                }
                .into_any(),
                None => view! {
                    <p class="review-card__pending">"Not analysed"</p>
                }
                .into_any(),
            };
            view! {
                <div class="review-card">
                    <p class="review-card__comment">{icon("reviews")}" "{review.comment}</p>
                    <p class="review-card__rating">{icon("star")}{format!(" Rating: {}", review.rating)}</p>
                    {status}
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| analyse_one(id, comment.clone())
                        disabled=move || analysing.with(|s| s.contains(&id))
                    >
                        "Analyse"
                    </Button>
                </div>
            }
        })
        .collect::<Vec<_>>();
    let is_empty = cards.is_empty();

    view! {
        <div class="details-container product-reviews">
            <div class="details-header">
                <h3>{format!("Reviews: {}", product_name)}</h3>
            </div>

            {if is_empty {
                view! { <p class="empty-state">"No reviews available."</p> }.into_any()
            } else {
                view! { <div class="review-list">{cards}</div> }.into_any()
            }}

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_close.run(())>
                    "Close"
                </Button>
            </div>
        </div>
    }
}
