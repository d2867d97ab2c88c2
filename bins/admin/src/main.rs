//! Administration CLI for Cashpool.
//!
//! Communities and members are provisioned out of band; there is no HTTP
//! surface for tenant administration.
//!
//! Usage:
//!   admin community add <name>
//!   admin community rename <id> <new-name>
//!   admin community remove <id>
//!   admin member add <community-id> <name> <username> <password> [percentage]
//!   admin member set-percentage <member-id> <percentage>

use anyhow::{Context, bail};

use cashpool_core::auth::hash_password;
use cashpool_db::{CommunityRepository, MemberRepository, connect};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;
    let db = connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["community", "add", name] => {
            let community = CommunityRepository::new(db).create(name).await?;
            println!("Community created with ID: {}", community.id);
        }
        ["community", "rename", id, name] => {
            let repo = CommunityRepository::new(db);
            let Some(community) = repo.find_by_id(id.parse()?).await? else {
                bail!("Community with ID {id} not found");
            };
            let community = repo.rename(community, name).await?;
            println!("Community {} renamed to {}", community.id, community.name);
        }
        ["community", "remove", id] => {
            let removed = CommunityRepository::new(db).remove(id.parse()?).await?;
            if removed == 0 {
                bail!("Community with ID {id} not found");
            }
            println!("Community {id} removed");
        }
        ["member", "add", community_id, name, username, password, rest @ ..] => {
            let contribution_percentage: i16 = match rest {
                [] => 100,
                [percentage] => percentage.parse()?,
                _ => bail!("Too many arguments for member add"),
            };
            if !(0..=100).contains(&contribution_percentage) {
                bail!("Contribution percentage must be between 0 and 100");
            }

            let password_hash = hash_password(password)?;
            let member = MemberRepository::new(db)
                .create(
                    community_id.parse()?,
                    name,
                    username,
                    &password_hash,
                    contribution_percentage,
                )
                .await?;
            println!("Member created with ID: {}", member.id);
        }
        ["member", "set-percentage", member_id, percentage] => {
            let contribution_percentage: i16 = percentage.parse()?;
            if !(0..=100).contains(&contribution_percentage) {
                bail!("Contribution percentage must be between 0 and 100");
            }

            let repo = MemberRepository::new(db);
            let Some(member) = repo.find_by_id(member_id.parse()?).await? else {
                bail!("Member with ID {member_id} not found");
            };
            let member = repo
                .set_contribution_percentage(member, contribution_percentage)
                .await?;
            println!(
                "Member {} default contribution set to {}%",
                member.id, member.contribution_percentage
            );
        }
        _ => {
            eprintln!("Usage:");
            eprintln!("  admin community add <name>");
            eprintln!("  admin community rename <id> <new-name>");
            eprintln!("  admin community remove <id>");
            eprintln!("  admin member add <community-id> <name> <username> <password> [percentage]");
            eprintln!("  admin member set-percentage <member-id> <percentage>");
            std::process::exit(1);
        }
    }

    Ok(())
}
