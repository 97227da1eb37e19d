use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the product catalog over HTTP
    Serve {
        #[arg(long, help = "Port to listen on (env STOREFRONT_PORT, default 3000)")]
        port: Option<u16>,

        #[arg(long, help = "JSON file of items to load at startup (env STOREFRONT_SEED)")]
        seed: Option<PathBuf>,

        #[arg(long, help = "Items per page (env STOREFRONT_PAGE_SIZE, default 4)")]
        page_size: Option<usize>,

        #[arg(long, help = "Read additional environment variables from this file")]
        env_file: Option<PathBuf>,
    },
    /// Fetch one page from a seed file and print it
    Search {
        #[arg(long, help = "JSON file of items to search")]
        seed: PathBuf,

        #[arg(long, default_value = "text", help = "\"text\" or \"price: low - high\"")]
        sort_method: String,

        #[arg(long, default_value = "next", help = "\"next\" or \"previous\"")]
        page: String,

        #[arg(
            long,
            allow_hyphen_values = true,
            requires = "unique_key",
            help = "Ordering value of the boundary item"
        )]
        sort_key: Option<f64>,

        #[arg(long, requires = "sort_key", help = "Id of the boundary item")]
        unique_key: Option<String>,

        #[arg(long)]
        query: Option<String>,

        #[arg(long)]
        brand: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long, default_value_t = 4)]
        page_size: usize,

        #[arg(long, help = "Print the page as JSON instead of a table")]
        json: bool,
    },
    /// List the maintained product categories
    Categories {
        #[arg(long, help = "Print as a JSON array")]
        json: bool,
    },
}
