use crate::{
    commands::{
        arguments::TrimmedString, autocomplete_tournament, reply_private, user_err,
        CommandResult, Context,
    },
    models::{CategoryId, Competitor, CompetitorId, TournamentId},
};

/// Register competitors and enter them in categories.
#[poise::command(
    slash_command,
    subcommands("add", "rename", "remove", "enter", "leave", "list")
)]
pub async fn competitor(_ctx: Context<'_>) -> CommandResult {
    Err(user_err("Please pick one of the `/competitor` subcommands"))
}

fn competitor_line(competitor: &Competitor) -> String {
    let categories = if competitor.categories.is_empty() {
        "no categories".to_string()
    } else {
        competitor
            .categories
            .iter()
            .map(|c| format!("`{c}`"))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        " - **{}** (id: `{}`) - {categories}\n",
        competitor.name, competitor.id
    )
}

/// Register a competitor, optionally entering them in a category right away.
#[poise::command(slash_command, required_permissions = "ADMINISTRATOR")]
async fn add(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,

    #[description = "Competitor name."] name: TrimmedString,

    #[description = "Category id to enter."] category: Option<TrimmedString>,
) -> CommandResult {
    let category = category.map(|c| CategoryId(c.into()));

    let competitor = ctx
        .data()
        .tournament_service
        .register_competitor(
            &TournamentId(tournament.into()),
            name.as_ref(),
            category.as_ref(),
        )
        .await?;

    reply_private(
        ctx,
        format!("# Competitor registered\n{}", competitor_line(&competitor)),
    )
    .await
}

/// Fix the name of a competitor.
#[poise::command(slash_command, required_permissions = "ADMINISTRATOR")]
async fn rename(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,

    #[description = "Competitor id."] competitor: TrimmedString,

    #[description = "The new name."] name: TrimmedString,
) -> CommandResult {
    let competitor = ctx
        .data()
        .tournament_service
        .rename_competitor(
            &TournamentId(tournament.into()),
            &CompetitorId(competitor.into()),
            name.as_ref(),
        )
        .await?;

    reply_private(
        ctx,
        format!("# Competitor renamed\n{}", competitor_line(&competitor)),
    )
    .await
}

/// Remove a competitor together with all of their results.
#[poise::command(slash_command, required_permissions = "ADMINISTRATOR")]
async fn remove(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,

    #[description = "Competitor id."] competitor: TrimmedString,
) -> CommandResult {
    let competitor = ctx
        .data()
        .tournament_service
        .remove_competitor(
            &TournamentId(tournament.into()),
            &CompetitorId(competitor.into()),
        )
        .await?;

    reply_private(
        ctx,
        format!("# Competitor **{}** removed", competitor.name),
    )
    .await
}

/// Enter a competitor in a category.
#[poise::command(slash_command, required_permissions = "ADMINISTRATOR")]
async fn enter(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,

    #[description = "Competitor id."] competitor: TrimmedString,

    #[description = "Category id."] category: TrimmedString,
) -> CommandResult {
    let competitor = CompetitorId(competitor.into());
    let category = CategoryId(category.into());

    let entered = ctx
        .data()
        .tournament_service
        .enter_category(&TournamentId(tournament.into()), &competitor, &category)
        .await?;

    let message = if entered {
        format!("# Competitor `{competitor}` entered in `{category}`")
    } else {
        format!("# Competitor `{competitor}` was already entered in `{category}`")
    };

    reply_private(ctx, message).await
}

/// Take a competitor out of a category. Recorded results stay.
#[poise::command(slash_command, required_permissions = "ADMINISTRATOR")]
async fn leave(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,

    #[description = "Competitor id."] competitor: TrimmedString,

    #[description = "Category id."] category: TrimmedString,
) -> CommandResult {
    let competitor = CompetitorId(competitor.into());
    let category = CategoryId(category.into());

    let left = ctx
        .data()
        .tournament_service
        .leave_category(&TournamentId(tournament.into()), &competitor, &category)
        .await?;

    if !left {
        return Err(user_err(format!(
            "Competitor `{competitor}` is not entered in `{category}`"
        )));
    }

    reply_private(
        ctx,
        format!("# Competitor `{competitor}` left `{category}`"),
    )
    .await
}

/// List the competitors of a tournament or of one of its categories.
#[poise::command(slash_command)]
async fn list(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,

    #[description = "Only show the entrants of this category."] category: Option<
        TrimmedString,
    >,
) -> CommandResult {
    let category = category.map(|c| CategoryId(c.into()));

    let competitors = ctx
        .data()
        .tournament_service
        .competitors(&TournamentId(tournament.into()), category.as_ref())
        .await?;

    if competitors.is_empty() {
        return reply_private(ctx, "# There are no competitors yet").await;
    }

    let list = competitors
        .iter()
        .fold(String::new(), |acc, competitor| acc + &competitor_line(competitor));

    reply_private(
        ctx,
        format!("# Competitors ({}):\n{list}", competitors.len()),
    )
    .await
}
