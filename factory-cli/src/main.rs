mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use config::CliConfig;
use factory_core::{
    DomainError, FileRepository, Notice, Post, PostDraft, PostId, PostManager, SimulatedPublisher,
};
use logging::init_logging;

#[derive(Parser, Debug)]
#[clap(name = "factory", about = "Draft, schedule and publish posts")]
struct Cli {
    /// Directory holding the post collection.
    #[clap(short, long)]
    data_dir: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    List,
    Show {
        id: PostId,
    },
    Create {
        #[clap(long)]
        title: String,
        #[clap(long)]
        content: String,
        /// Kept as typed; defaults to now.
        #[clap(long, default_value = "")]
        schedule: String,
    },
    Publish {
        id: PostId,
    },
    Delete {
        id: PostId,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let config = CliConfig::from_env()?;
    init_logging(&config.log_filter);

    let args = Cli::parse();
    let data_dir = args.data_dir.unwrap_or(config.data_dir);
    let repo = FileRepository::new(&data_dir, &config.storage_key);
    let mut manager = PostManager::open(repo, SimulatedPublisher);

    let code = match args.command {
        Command::List => {
            let posts = manager.posts();
            println!("Posts ({})", posts.len());
            for post in posts {
                println!("- [{}] {} ({})", post.id, post.title, post.status.label());
            }
            ExitCode::SUCCESS
        }
        Command::Show { id } => match manager.get(id) {
            Some(post) => {
                print_post(post);
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("Post {} not found", id);
                ExitCode::FAILURE
            }
        },
        Command::Create {
            title,
            content,
            schedule,
        } => match manager.create(PostDraft::new(title, content, schedule)) {
            Ok(post) => {
                println!("{} ID: {}", Notice::Added, post.id);
                ExitCode::SUCCESS
            }
            Err(e) => report(&e),
        },
        Command::Publish { id } => match manager.publish(id) {
            Ok(notice) => {
                println!("{}", notice);
                ExitCode::SUCCESS
            }
            Err(e) => report(&e),
        },
        Command::Delete { id } => {
            println!("{}", manager.delete(id));
            ExitCode::SUCCESS
        }
    };

    if !manager.is_synced() {
        anyhow::bail!(
            "changes were not saved to {}",
            manager.store().repository().path().display()
        );
    }

    Ok(code)
}

fn print_post(post: &Post) {
    println!("{}", post);
    println!("Status:    {}", post.status.label());
    println!("Created:   {}", post.created_at.to_rfc3339());
    if !post.schedule_time.is_empty() {
        println!("Scheduled: {}", post.schedule_time);
    }
    println!();
    println!("{}", post.content);
}

fn report(err: &DomainError) -> ExitCode {
    match Notice::for_error(err) {
        Some(notice) => eprintln!("{}", notice),
        None => eprintln!("Error: {}", err),
    }
    ExitCode::FAILURE
}
