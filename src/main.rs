use anyhow::Result;
use clap::{Parser, Subcommand};
use marquee::api::ApiClient;
use marquee::api_error::ApiError;
use marquee::commands::auth::{self, AuthOutcome};
use marquee::commands::shows::BookOutcome;
use marquee::commands::{bookings, movies, shows};
use marquee::models::user::Credentials;
use marquee::render::Renderer;
use marquee::session::SessionStore;
use marquee::store::{self, LocalStore};
use marquee::theme::Theme;
use marquee::AppConfig;
use std::io::{self, Write};
use std::process::exit;
use tracing::Level;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the movies on sale
    Movies,
    /// List the shows for a movie
    Shows { movie_id: i64 },
    /// Book a seat on a show
    Book {
        show_id: i64,
        /// Seat number to reserve
        #[arg(long, default_value_t = 1)]
        seat: u32,
    },
    /// List your bookings
    Bookings,
    /// Cancel one of your bookings
    Cancel { booking_id: i64 },
    /// Create an account
    Signup,
    /// Log in and store the session token
    Login,
    /// Drop the stored session
    Logout,
    /// Show the current login state
    Status,
    /// Show or set the color theme
    Theme {
        #[arg(value_enum)]
        theme: Option<Theme>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing/logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let cli = Cli::parse();

    let cfg = AppConfig::new_from_file_and_env(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        exit(1);
    });
    tracing::debug!("config: {:?}", cfg);

    let state_path = match &cfg.state_path {
        Some(path) => path.clone(),
        None => store::default_path()?,
    };
    let mut store = LocalStore::open(state_path)?;

    // Theme runs before anything network-facing; it only touches the store.
    if let Commands::Theme { theme } = &cli.command {
        if let Some(theme) = theme {
            theme.persist(&mut store)?;
        }
        println!("{}", Theme::load(&store).as_str());
        return Ok(());
    }

    let theme = Theme::load(&store);
    let renderer = Renderer::new(theme)?;
    let session = SessionStore::new(store);
    let mut client = ApiClient::new(&cfg, session)?;

    match cli.command {
        Commands::Movies => {
            println!("{}", report(movies::grid(&client, &renderer).await));
        }
        Commands::Shows { movie_id } => {
            println!("{}", report(shows::list(&client, &renderer, movie_id).await));
        }
        Commands::Book { show_id, seat } => {
            match shows::book(&client, &renderer, show_id, seat).await {
                Ok(BookOutcome::Booked(confirmation)) => println!("{}", confirmation),
                Ok(BookOutcome::LoginRequired(notice)) => {
                    eprintln!("{}", notice);
                    exit(1);
                }
                Err(err) => {
                    eprintln!("error: {}", err);
                    exit(1);
                }
            }
        }
        Commands::Bookings => {
            println!("{}", report(bookings::list(&client, &renderer).await));
        }
        Commands::Cancel { booking_id } => {
            println!(
                "{}",
                report(bookings::cancel(&client, &renderer, booking_id).await)
            );
        }
        Commands::Signup => {
            let creds = prompt_credentials()?;
            match auth::signup(&client, &creds).await {
                AuthOutcome::Success(message) => println!("{}", message),
                AuthOutcome::Failure(message) => {
                    eprintln!("{}", message);
                    exit(1);
                }
            }
        }
        Commands::Login => {
            let creds = prompt_credentials()?;
            match auth::login(&mut client, &renderer, &creds).await {
                Ok(AuthOutcome::Success(status)) => println!("{}", status),
                Ok(AuthOutcome::Failure(message)) => {
                    eprintln!("{}", message);
                    exit(1);
                }
                Err(err) => {
                    eprintln!("error: {}", err);
                    exit(1);
                }
            }
        }
        Commands::Logout => {
            println!("{}", report(auth::logout(&mut client, &renderer)));
        }
        Commands::Status => {
            println!("{}", renderer.status(client.session())?);
        }
        Commands::Theme { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn report(result: Result<String, ApiError>) -> String {
    match result {
        Ok(output) => output,
        Err(err) => {
            eprintln!("error: {}", err);
            exit(1);
        }
    }
}

fn prompt_credentials() -> Result<Credentials> {
    print!("Username: ");
    io::stdout().flush()?;
    let mut username = String::new();
    io::stdin().read_line(&mut username)?;
    let username = username.trim().to_string();

    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;

    Ok(Credentials { username, password })
}
