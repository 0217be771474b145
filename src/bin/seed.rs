use clap::Parser;
use fake::{
    faker::{internet::en::FreeEmail, name::en::Name, phone_number::en::PhoneNumber},
    Fake,
};
use sqlx::sqlite::SqlitePoolOptions;

use rallybook::{
    domain::{CreateMemberRequest, MemberStatus},
    repository::{MemberRepository, SqliteEventRepository, SqliteMemberRepository},
    sample_data,
};

/// Populate the database with the sample roster and events, plus
/// optional generated members.
#[derive(Parser)]
struct Args {
    /// Database URL; falls back to DATABASE_URL, then the local file.
    #[arg(long)]
    database_url: Option<String>,

    /// Number of extra members to generate on top of the sample roster.
    #[arg(long, default_value_t = 0)]
    extra_members: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    println!("🌱 Starting database seeding...");

    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite://rallybook.db?mode=rwc".to_string());

    let db_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    println!("📋 Running migrations...");
    sqlx::migrate!("./migrations").run(&db_pool).await?;

    let member_repo = SqliteMemberRepository::new(db_pool.clone());
    let event_repo = SqliteEventRepository::new(db_pool.clone());

    println!("👥 Creating sample roster and events...");
    sample_data::seed(&member_repo, &event_repo).await?;

    let skill_levels = ["2.5", "3.0", "3.5", "4.0", "4.5"];
    for i in 0..args.extra_members {
        let name: String = Name().fake();
        let handle = format!("@{}", name.to_lowercase().replace(' ', ""));
        member_repo
            .create(CreateMemberRequest {
                name,
                email: FreeEmail().fake(),
                phone: PhoneNumber().fake(),
                skill_level: skill_levels[i % skill_levels.len()].to_string(),
                payment_handle: handle,
                notes: String::new(),
                joined_on: None,
                status: MemberStatus::Active,
            })
            .await?;
    }
    if args.extra_members > 0 {
        println!("  ✅ Generated {} extra members", args.extra_members);
    }

    let members = member_repo.list().await?;
    println!("✅ Seeding complete: {} members total", members.len());

    Ok(())
}
