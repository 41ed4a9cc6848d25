use anyhow::Result;
use minijinja::{context, Environment, State};

use crate::models::booking::Booking;
use crate::models::movie::Movie;
use crate::models::show::Show;
use crate::session::SessionStore;
use crate::theme::Theme;

/// Fixed placeholder row shown when the bookings fetch fails.
pub const BOOKINGS_PLACEHOLDER: &str = "Login to view bookings.";

/// Shown instead of issuing a booking request when no token is stored.
pub const LOGIN_REQUIRED: &str =
    "Login required. Run marquee login to sign in, or marquee signup to create an account.";

/// Template-backed terminal output. The theme lands on the environment as a
/// global, so templates style themselves from it the way the original page
/// styled itself from the document theme attribute.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(theme: Theme) -> Result<Self> {
        let mut env = Environment::new();
        minijinja_contrib::add_to_environment(&mut env);
        env.add_global("theme", theme.as_str());
        env.add_filter("accent", accent);
        env.add_template("movies.jinja", include_str!("../templates/movies.jinja"))?;
        env.add_template("shows.jinja", include_str!("../templates/shows.jinja"))?;
        env.add_template("bookings.jinja", include_str!("../templates/bookings.jinja"))?;
        env.add_template("status.jinja", include_str!("../templates/status.jinja"))?;
        env.add_template(
            "confirmation.jinja",
            include_str!("../templates/confirmation.jinja"),
        )?;
        Ok(Self { env })
    }

    pub fn movies(&self, movies: &[Movie]) -> Result<String> {
        let template = self.env.get_template("movies.jinja")?;
        Ok(template.render(context! { movies })?)
    }

    pub fn shows(&self, shows: &[Show]) -> Result<String> {
        let template = self.env.get_template("shows.jinja")?;
        Ok(template.render(context! { shows })?)
    }

    pub fn bookings(&self, bookings: &[Booking]) -> Result<String> {
        let template = self.env.get_template("bookings.jinja")?;
        Ok(template.render(context! { bookings })?)
    }

    pub fn booking_confirmation(&self, booking: &Booking) -> Result<String> {
        let template = self.env.get_template("confirmation.jinja")?;
        Ok(template.render(context! { booking })?)
    }

    /// The auth indicator: a pure function of current stored session state.
    pub fn status(&self, session: &SessionStore) -> Result<String> {
        let template = self.env.get_template("status.jinja")?;
        Ok(template.render(context! {
            token_present => session.is_logged_in(),
            username => session.username(),
        })?)
    }

    pub fn bookings_placeholder(&self) -> String {
        BOOKINGS_PLACEHOLDER.to_string()
    }

    pub fn login_required(&self) -> String {
        LOGIN_REQUIRED.to_string()
    }
}

// Bold in the dark theme, plain otherwise.
fn accent(state: &State, value: String) -> String {
    let dark = state
        .lookup("theme")
        .map(|theme| theme.as_str() == Some("dark"))
        .unwrap_or(false);
    if dark {
        format!("\u{1b}[1m{}\u{1b}[0m", value)
    } else {
        value
    }
}
