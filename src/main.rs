use clap::{Parser, Subcommand};
use dotenv::dotenv;
use eshop_storefront::{
    config::Settings,
    cqrs::{AddToCartCommand, CheckoutCommand, CommandHandler},
    domain::Identifier,
    error::StorefrontError,
    form::FormFields,
    state::AppState,
    telemetry,
};

#[derive(Parser)]
#[command(name = "eshop-storefront", about = "Bookstore cart and checkout actions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a book to the user's cart
    AddToCart {
        book_id: Identifier,
        user_id: Identifier,
    },
    /// Place an order for the current cart
    Checkout {
        #[arg(long)]
        payment_method: String,
        #[arg(long)]
        shipping_address: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), StorefrontError> {
    dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    telemetry::init(&settings)?;

    match cli.command {
        Commands::AddToCart { book_id, user_id } => {
            let state = AppState::new(&settings, FormFields::new())?;
            state
                .cart_adder
                .handle(&AddToCartCommand { book_id, user_id })
                .await
        }
        Commands::Checkout {
            payment_method,
            shipping_address,
        } => {
            let form = FormFields::checkout_form(payment_method, shipping_address);
            let state = AppState::new(&settings, form)?;
            state.checkout_submitter.handle(&CheckoutCommand {}).await
        }
    }
}
