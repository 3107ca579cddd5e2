//! Review tabs and review form renderers.

use pdp_commerce::reviews::{Rating, Review};

use crate::components::{ReviewForm, ReviewTabs, Tab};
use crate::sections::escape_html;

/// Render the tab strip and both views; the inactive view is hidden.
pub fn render_review_tabs(tabs: &ReviewTabs) -> String {
    let strip: String = Tab::ALL
        .iter()
        .map(|tab| {
            let class = if tabs.is_visible(*tab) { "tab active-tab" } else { "tab" };
            format!(
                r#"<span class="{class}" data-tab="{label}">{label}</span>"#,
                class = class,
                label = tab.label()
            )
        })
        .collect();

    let reviews = tabs.reviews();
    let list = if reviews.is_empty() {
        r#"<p class="no-reviews">There are no reviews yet!</p>"#.to_string()
    } else {
        reviews.iter().map(render_single_review).collect()
    };

    format!(
        r#"<section class="review-tabs" data-section="reviews">
    <div class="tab-strip">{strip}</div>
    <div class="reviews-view"{reviews_hidden}>
        {list}
    </div>
    <div class="review-form-view"{form_hidden}>
        {form}
    </div>
</section>"#,
        strip = strip,
        reviews_hidden = hidden_attr(tabs.is_visible(Tab::Reviews)),
        list = list,
        form_hidden = hidden_attr(tabs.is_visible(Tab::MakeAReview)),
        form = render_review_form(tabs.form())
    )
}

fn hidden_attr(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        r#" style="display: none;""#
    }
}

fn render_single_review(review: &Review) -> String {
    format!(
        r#"<article class="review-container">
        <label><b>{name}</b></label>
        <p class="review-body">{body}</p>
        <p class="review-rating">Rating: {rating} <span class="review-stars">{stars}</span></p>
        <p class="review-recommend">Recommended: {recommend}</p>
    </article>"#,
        name = escape_html(&review.name),
        body = escape_html(&review.review),
        rating = review.rating,
        stars = review.rating.stars(),
        recommend = if review.recommend { "Yes" } else { "No" }
    )
}

/// Render the review form with its current inputs and errors.
pub fn render_review_form(form: &ReviewForm) -> String {
    let errors = if form.errors().is_empty() {
        String::new()
    } else {
        let items: String = form
            .errors()
            .iter()
            .map(|error| format!("<li>{}</li>", escape_html(error)))
            .collect();
        format!(r#"<ul class="form-errors">{}</ul>"#, items)
    };

    let options: String = Rating::options()
        .map(|rating| {
            let selected = if form.rating() == Some(rating) { " selected" } else { "" };
            format!(
                r#"<option value="{value}"{selected}>{value}</option>"#,
                value = rating,
                selected = selected
            )
        })
        .collect();

    let placeholder_selected = if form.rating().is_none() { " selected" } else { "" };
    let checked = if form.recommend() { " checked" } else { "" };

    format!(
        r#"<form class="review-form" method="post">
    {errors}
    <div>
        <label for="name">Name</label>
        <input id="name" name="name" value="{name}">
    </div>
    <div>
        <label for="review">Review</label>
        <textarea id="review" name="review">{review}</textarea>
    </div>
    <div>
        <label for="rating">Rating</label>
        <select id="rating" name="rating">
            <option value=""{placeholder_selected} disabled>Choose...</option>
            {options}
        </select>
    </div>
    <div>
        <p>Would you recommend this product?</p>
        <label><input type="checkbox" name="recommend"{checked}> Yes</label>
    </div>
    <button type="submit">Submit</button>
</form>"#,
        errors = errors,
        name = escape_html(form.name()),
        review = escape_html(form.review()),
        placeholder_selected = placeholder_selected,
        options = options,
        checked = checked
    )
}
