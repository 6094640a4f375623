//! Terminal rendering over controller state snapshots.
//!
//! The renderer only sees `FetchState` and canonical `Dish` values, never a
//! raw wire field. `Idle` and `Loading` both render the progress line.

use owo_colors::OwoColorize;
use tastelens_runtime::UserProfile;
use tastelens_types::{Dish, FetchState, Recommendations};

/// Options for rendered output
#[derive(Debug, Clone)]
pub struct RenderOpts {
    pub enable_color: bool,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self { enable_color: true }
    }
}

pub fn render_feed(state: &FetchState<Vec<Dish>>, opts: &RenderOpts) -> String {
    match state {
        FetchState::Idle | FetchState::Loading => progress("Loading featured dishes..."),
        FetchState::Error(message) => error_line(message, opts),
        FetchState::Success(dishes) => {
            let mut out = heading("Popular Dishes", opts);
            if dishes.is_empty() {
                out.push_str("No featured dishes right now.\n");
            }
            for dish in dishes {
                out.push_str(&dish_card(dish, opts));
            }
            out
        }
    }
}

pub fn render_dish(state: &FetchState<Dish>, opts: &RenderOpts) -> String {
    match state {
        FetchState::Idle | FetchState::Loading => progress("Loading dish..."),
        FetchState::Error(message) => error_line(message, opts),
        FetchState::Success(dish) => detail_panel(dish, opts),
    }
}

pub fn render_recommendations(
    profile: &UserProfile,
    state: &FetchState<Recommendations>,
    opts: &RenderOpts,
) -> String {
    let mut out = profile_header(profile, opts);
    match state {
        FetchState::Idle | FetchState::Loading => {
            out.push_str(&progress("Loading your personalized recommendations..."));
        }
        FetchState::Error(message) => out.push_str(&error_line(message, opts)),
        FetchState::Success(recs) => {
            out.push_str(&heading("Recently Rated Dishes", opts));
            out.push_str(&card_list(&recs.recently_rated, opts));
            out.push_str(&heading("Recommended For You", opts));
            out.push_str(&card_list(&recs.recommended, opts));
        }
    }
    out
}

fn card_list(dishes: &[Dish], opts: &RenderOpts) -> String {
    if dishes.is_empty() {
        return "  (none yet)\n".to_string();
    }
    dishes.iter().map(|dish| dish_card(dish, opts)).collect()
}

fn dish_card(dish: &Dish, opts: &RenderOpts) -> String {
    let mut out = String::new();
    let name = if opts.enable_color {
        format!("{}", dish.name.yellow())
    } else {
        dish.name.clone()
    };
    out.push_str(&format!("  {}\n", name));
    out.push_str(&format!("    Restaurant: {}\n", dish.restaurant_or_empty()));
    out.push_str(&format!("    Price: {}\n", format_cost(dish.average_cost)));
    out.push_str(&format!("    Rating: {} / 5\n", dish.rating));
    if let Some(diet) = &dish.diet_type {
        out.push_str(&format!("    Diet: {}\n", diet));
    }
    out.push('\n');
    out
}

fn detail_panel(dish: &Dish, opts: &RenderOpts) -> String {
    let mut out = String::new();
    let name = if opts.enable_color {
        format!("{}", dish.name.yellow())
    } else {
        dish.name.clone()
    };
    let badge = if opts.enable_color {
        format!("{}", format!("* {}", dish.rating).green())
    } else {
        format!("* {}", dish.rating)
    };
    out.push_str(&format!("{}  {}\n\n", name, badge));
    out.push_str(&format!("  Price: {} (inclusive of all taxes)\n", format_cost(dish.average_cost)));
    out.push_str(&format!("  Restaurant: {}\n", dish.restaurant_or_empty()));
    if let Some(cuisine) = &dish.cuisine {
        out.push_str(&format!("  Cuisine: {}\n", cuisine));
    }
    if let Some(diet) = &dish.diet_type {
        out.push_str(&format!("  Diet Type: {}\n", diet));
    }
    if let Some(calories) = dish.calories {
        out.push_str(&format!("  Calories: {}\n", calories));
    }
    out.push_str(&format!("  Image: {}\n", dish.image_or_placeholder()));
    out
}

fn profile_header(profile: &UserProfile, opts: &RenderOpts) -> String {
    let mut out = String::new();
    let name = if opts.enable_color {
        format!("{}", profile.name.bold())
    } else {
        profile.name.clone()
    };
    out.push_str(&format!("{}\n", name));
    out.push_str(&format!("  {}\n", profile.location));
    out.push_str(&format!("  Favorite Dish: {}\n", profile.favorite_dish));
    out.push_str(&format!(
        "  Preferred Cuisine: {} | Diet: {}\n\n",
        profile.preferred_cuisine, profile.diet_type
    ));
    out
}

fn heading(text: &str, opts: &RenderOpts) -> String {
    if opts.enable_color {
        format!("{}\n\n", text.yellow())
    } else {
        format!("{}\n\n", text)
    }
}

fn error_line(message: &str, opts: &RenderOpts) -> String {
    if opts.enable_color {
        format!("{}\n", message.red())
    } else {
        format!("{}\n", message)
    }
}

fn progress(message: &str) -> String {
    format!("{}\n", message)
}

/// Whole amounts print without a fraction; everything else keeps two places.
fn format_cost(cost: f64) -> String {
    if cost.fract() == 0.0 {
        format!("\u{20b9}{}", cost as i64)
    } else {
        format!("\u{20b9}{:.2}", cost)
    }
}
