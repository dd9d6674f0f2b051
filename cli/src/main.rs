//! social-graph-cli: run the social analytics queries over the reference network
//!
//! The network is built in-process from `social_graph::demo` on every
//! invocation; there is no server to connect to.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use social_graph::{
    demo, Community, EngineConfig, FriendOfFriend, InterestRecommendation, NetworkStatistics,
    SocialNetwork,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "social-graph", version, about = "Social graph analytics CLI")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// YAML engine configuration
    #[arg(long, global = true, env = "SOCIAL_GRAPH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every query for alice
    Demo,
    /// Second-degree connections ranked by mutual friends
    FriendsOfFriends {
        /// User id
        user: String,
    },
    /// Shortest friendship chain between two users
    Path {
        from: String,
        to: String,
    },
    /// Non-friends ranked by shared interests
    Recommend {
        /// User id
        user: String,
    },
    /// Interests shared by at least N users
    Communities {
        /// Minimum members (defaults to the configured threshold)
        #[arg(long)]
        min: Option<usize>,
    },
    /// Connectivity summary for a user
    Stats {
        /// User id
        user: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let network = SocialNetwork::with_config(config);
    demo::populate(&network).context("building the demo network")?;
    info!(
        "Demo network ready: {} nodes, {} edges",
        network.node_count(),
        network.edge_count()
    );

    match cli.command {
        Commands::Demo => run_demo(&network, cli.format),
        Commands::FriendsOfFriends { user } => {
            print_friends_of_friends(&network.find_friends_of_friends(&user), cli.format)
        }
        Commands::Path { from, to } => {
            print_path(network.find_shortest_connection_path(&from, &to), cli.format)
        }
        Commands::Recommend { user } => {
            print_recommendations(&network.recommend_friends_by_interests(&user), cli.format)
        }
        Commands::Communities { min } => {
            let communities = match min {
                Some(min) => network.find_communities(min),
                None => network.find_communities_default(),
            };
            print_communities(&communities, cli.format)
        }
        Commands::Stats { user } => print_stats(network.get_network_statistics(&user), cli.format),
    }
}

fn run_demo(network: &SocialNetwork, format: OutputFormat) -> Result<()> {
    let user = "alice";

    if let OutputFormat::Json = format {
        let report = serde_json::json!({
            "friends_of_friends": network.find_friends_of_friends(user),
            "path_to_henry": network.find_shortest_connection_path(user, "henry"),
            "recommendations": network.recommend_friends_by_interests(user),
            "communities": network.find_communities_default(),
            "statistics": network.get_network_statistics(user),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("== Friends of friends for {} ==", user);
    print_friends_of_friends(&network.find_friends_of_friends(user), format)?;

    println!("\n== Shortest path {} -> henry ==", user);
    print_path(network.find_shortest_connection_path(user, "henry"), format)?;

    println!("\n== Recommendations for {} ==", user);
    print_recommendations(&network.recommend_friends_by_interests(user), format)?;

    println!("\n== Communities ==");
    print_communities(&network.find_communities_default(), format)?;

    println!("\n== Statistics for {} ==", user);
    print_stats(network.get_network_statistics(user), format)
}

fn new_table<const N: usize>(header: [&str; N]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn print_friends_of_friends(rows: &[FriendOfFriend], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("(no results)");
                return Ok(());
            }
            let mut table = new_table(["user_id", "name", "location", "mutual_friends"]);
            for row in rows {
                table.add_row(vec![
                    row.user_id.clone(),
                    row.name.clone(),
                    row.location.clone().unwrap_or_default(),
                    row.mutual_friends.to_string(),
                ]);
            }
            println!("{}", table);
            println!("{} row(s)", rows.len());
        }
    }
    Ok(())
}

fn print_path(path: Option<Vec<String>>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&path)?),
        OutputFormat::Table => match path {
            Some(names) => {
                println!("{}", names.join(" -> "));
                println!("{} hop(s)", names.len().saturating_sub(1));
            }
            None => println!("(no path)"),
        },
    }
    Ok(())
}

fn print_recommendations(rows: &[InterestRecommendation], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("(no results)");
                return Ok(());
            }
            let mut table = new_table([
                "user_id",
                "name",
                "location",
                "shared_interests",
                "common_interests",
            ]);
            for row in rows {
                table.add_row(vec![
                    row.user_id.clone(),
                    row.name.clone(),
                    row.location.clone().unwrap_or_default(),
                    row.shared_interests.to_string(),
                    row.common_interests.join(", "),
                ]);
            }
            println!("{}", table);
            println!("{} row(s)", rows.len());
        }
    }
    Ok(())
}

fn print_communities(rows: &[Community], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("(no results)");
                return Ok(());
            }
            let mut table = new_table(["interest", "size", "members"]);
            for row in rows {
                table.add_row(vec![
                    row.interest.clone(),
                    row.size.to_string(),
                    row.members.join(", "),
                ]);
            }
            println!("{}", table);
            println!("{} row(s)", rows.len());
        }
    }
    Ok(())
}

fn print_stats(stats: Option<NetworkStatistics>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Table => match stats {
            Some(stats) => {
                println!("Name:                  {}", stats.name);
                println!("Friends:               {}", stats.friend_count);
                println!("Interests:             {}", stats.interest_count);
                println!("Potential connections: {}", stats.potential_connections);
            }
            None => println!("(unknown user)"),
        },
    }
    Ok(())
}
