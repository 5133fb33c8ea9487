use std::sync::Arc;

use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    models::{
        Category, CategoryFormat, CategoryId, Competitor, CompetitorId, NewTournament, Round,
        RoundFormat, RoundResult, Tournament, TournamentChanges, TournamentId,
    },
    repository::TournamentRepository,
    scoring::{rank_round, MatchSlot},
    utils::slug::unique_slug,
};

use super::ServiceError;

/// One line of a round's results table.
#[derive(Clone, Debug, PartialEq)]
pub struct StandingRow {
    pub rank: Option<usize>,
    pub competitor: String,
    pub result: RoundResult,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Standings {
    pub tournament: String,
    pub category: String,
    pub round: u32,
    pub format: RoundFormat,
    pub rows: Vec<StandingRow>,
}

/// Editing flows of the console. Each change loads the tournament, applies the
/// change and writes it back; changes are serialized so that two commands can't
/// overwrite each other's edits.
pub struct TournamentService {
    repository: Arc<dyn TournamentRepository>,
    write_lock: Mutex<()>,
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

fn non_empty(name: &str) -> Result<String, ServiceError> {
    let name = name.trim();

    if name.is_empty() {
        Err(ServiceError::EmptyName)
    } else {
        Ok(name.to_owned())
    }
}

fn category_not_found(id: &CategoryId) -> ServiceError {
    warn!("Category {id} not found");
    ServiceError::CategoryNotFound(id.clone())
}

fn round_not_found(number: u32) -> ServiceError {
    warn!("Round {number} not found");
    ServiceError::RoundNotFound(number)
}

fn competitor_not_found(id: &CompetitorId) -> ServiceError {
    warn!("Competitor {id} not found");
    ServiceError::CompetitorNotFound(id.clone())
}

fn require_format(category: &Category, format: CategoryFormat) -> Result<(), ServiceError> {
    if category.format == format {
        Ok(())
    } else {
        Err(ServiceError::WrongCategoryFormat {
            category: category.id.clone(),
            format: category.format,
        })
    }
}

fn category_mut<'a>(
    tournament: &'a mut Tournament,
    id: &CategoryId,
) -> Result<&'a mut Category, ServiceError> {
    tournament.category_mut(id).ok_or_else(|| category_not_found(id))
}

fn competitor_mut<'a>(
    tournament: &'a mut Tournament,
    id: &CompetitorId,
) -> Result<&'a mut Competitor, ServiceError> {
    tournament
        .competitor_mut(id)
        .ok_or_else(|| competitor_not_found(id))
}

fn entered_competitor<'a>(
    tournament: &'a Tournament,
    id: &CompetitorId,
    category: &CategoryId,
) -> Result<&'a Competitor, ServiceError> {
    let competitor = tournament
        .competitor(id)
        .ok_or_else(|| competitor_not_found(id))?;

    if !competitor.is_entered(category) {
        return Err(ServiceError::NotEntered {
            competitor: competitor.name.clone(),
            category: category.clone(),
        });
    }

    Ok(competitor)
}

impl TournamentService {
    pub fn new(repository: Arc<dyn TournamentRepository>) -> TournamentService {
        TournamentService {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn list_tournaments(&self) -> Result<Vec<Tournament>, ServiceError> {
        Ok(self.repository.list_tournaments().await?)
    }

    pub async fn get_tournament(&self, id: &TournamentId) -> Result<Tournament, ServiceError> {
        let tournament = self.repository.get_tournament(id).await?;

        tournament.ok_or_else(|| {
            warn!("Tournament {id} not found");
            ServiceError::TournamentNotFound(id.clone())
        })
    }

    /// Read-modify-write of one tournament. Nothing is written when `change` fails.
    async fn modify<T, F>(&self, id: &TournamentId, change: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut Tournament) -> Result<T, ServiceError> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;

        let mut tournament = self.get_tournament(id).await?;

        let value = match change(&mut tournament) {
            Ok(value) => value,
            Err(err) => {
                debug!("Tournament {id} left unchanged: {err}");
                return Err(err);
            }
        };

        self.repository.save_tournament(&tournament).await?;

        Ok(value)
    }

    #[tracing::instrument(skip(self))]
    pub async fn create_tournament(
        &self,
        mut new_tournament: NewTournament,
    ) -> Result<Tournament, ServiceError> {
        new_tournament.name = non_empty(&new_tournament.name)?;

        let _guard = self.write_lock.lock().await;

        let existing = self.repository.list_tournaments().await?;
        let id = unique_slug(&new_tournament.name, "Tournament", |slug| {
            existing.iter().any(|t| t.id.0 == slug)
        });

        let tournament = Tournament::create(TournamentId(id), new_tournament, today());
        self.repository.save_tournament(&tournament).await?;

        info!("Created tournament {}", tournament.id);

        Ok(tournament)
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_tournament(
        &self,
        id: &TournamentId,
        mut changes: TournamentChanges,
    ) -> Result<Tournament, ServiceError> {
        if let Some(name) = &mut changes.name {
            *name = non_empty(name)?;
        }

        self.modify(id, |tournament| {
            tournament.apply(changes);
            Ok(tournament.clone())
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn add_category(
        &self,
        id: &TournamentId,
        name: &str,
        format: CategoryFormat,
        first_round_format: Option<RoundFormat>,
    ) -> Result<Category, ServiceError> {
        let name = non_empty(name)?;

        let category = self
            .modify(id, |tournament| {
                let slug = unique_slug(&name, "Category", |slug| {
                    tournament.categories.iter().any(|c| c.id.0 == slug)
                });

                let category = Category::new(
                    CategoryId(slug),
                    name,
                    format,
                    first_round_format.unwrap_or_default(),
                );
                tournament.categories.push(category.clone());

                Ok(category)
            })
            .await?;

        info!("Added category {} to tournament {id}", category.id);

        Ok(category)
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove_category(
        &self,
        id: &TournamentId,
        category: &CategoryId,
    ) -> Result<Category, ServiceError> {
        self.modify(id, |tournament| {
            tournament
                .remove_category(category)
                .ok_or_else(|| category_not_found(category))
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn set_category_format(
        &self,
        id: &TournamentId,
        category: &CategoryId,
        format: CategoryFormat,
    ) -> Result<Category, ServiceError> {
        self.modify(id, |tournament| {
            let category = category_mut(tournament, category)?;
            category.set_format(format);
            Ok(category.clone())
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn add_round(
        &self,
        id: &TournamentId,
        category: &CategoryId,
        format: RoundFormat,
    ) -> Result<Round, ServiceError> {
        self.modify(id, |tournament| {
            let category = category_mut(tournament, category)?;
            require_format(category, CategoryFormat::Wca)?;

            let last = category.rounds.last().map(|r| r.number).unwrap_or_default();
            category
                .add_round(format)
                .cloned()
                .ok_or(ServiceError::RoundNumbersExhausted(last))
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove_round(
        &self,
        id: &TournamentId,
        category: &CategoryId,
        number: u32,
    ) -> Result<Round, ServiceError> {
        self.modify(id, |tournament| {
            category_mut(tournament, category)?
                .remove_round(number)
                .ok_or_else(|| round_not_found(number))
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn set_round_format(
        &self,
        id: &TournamentId,
        category: &CategoryId,
        number: u32,
        format: RoundFormat,
    ) -> Result<Round, ServiceError> {
        self.modify(id, |tournament| {
            let round = category_mut(tournament, category)?
                .round_mut(number)
                .ok_or_else(|| round_not_found(number))?;
            round.set_format(format);
            Ok(round.clone())
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn register_competitor(
        &self,
        id: &TournamentId,
        name: &str,
        category: Option<&CategoryId>,
    ) -> Result<Competitor, ServiceError> {
        let name = non_empty(name)?;

        let competitor = self
            .modify(id, |tournament| {
                let mut competitor = Competitor::new(tournament.next_competitor_id(), name);

                if let Some(category) = category {
                    if tournament.category(category).is_none() {
                        return Err(category_not_found(category));
                    }
                    competitor.enter(category.clone());
                }

                tournament.competitors.push(competitor.clone());
                Ok(competitor)
            })
            .await?;

        info!("Registered competitor {} in tournament {id}", competitor.id);

        Ok(competitor)
    }

    #[tracing::instrument(skip(self))]
    pub async fn rename_competitor(
        &self,
        id: &TournamentId,
        competitor: &CompetitorId,
        name: &str,
    ) -> Result<Competitor, ServiceError> {
        let name = non_empty(name)?;

        self.modify(id, |tournament| {
            let competitor = competitor_mut(tournament, competitor)?;
            competitor.name = name;
            Ok(competitor.clone())
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove_competitor(
        &self,
        id: &TournamentId,
        competitor: &CompetitorId,
    ) -> Result<Competitor, ServiceError> {
        self.modify(id, |tournament| {
            tournament
                .remove_competitor(competitor)
                .ok_or_else(|| competitor_not_found(competitor))
        })
        .await
    }

    /// Returns `false` when the competitor was already entered.
    #[tracing::instrument(skip(self))]
    pub async fn enter_category(
        &self,
        id: &TournamentId,
        competitor: &CompetitorId,
        category: &CategoryId,
    ) -> Result<bool, ServiceError> {
        self.modify(id, |tournament| {
            if tournament.category(category).is_none() {
                return Err(category_not_found(category));
            }

            Ok(competitor_mut(tournament, competitor)?.enter(category.clone()))
        })
        .await
    }

    /// Returns `false` when the competitor was not entered.
    #[tracing::instrument(skip(self))]
    pub async fn leave_category(
        &self,
        id: &TournamentId,
        competitor: &CompetitorId,
        category: &CategoryId,
    ) -> Result<bool, ServiceError> {
        self.modify(id, |tournament| {
            Ok(competitor_mut(tournament, competitor)?.leave(category))
        })
        .await
    }

    pub async fn competitors(
        &self,
        id: &TournamentId,
        category: Option<&CategoryId>,
    ) -> Result<Vec<Competitor>, ServiceError> {
        let tournament = self.get_tournament(id).await?;

        match category {
            Some(category) => {
                if tournament.category(category).is_none() {
                    return Err(category_not_found(category));
                }
                Ok(tournament.competitors_in(category).cloned().collect())
            }
            None => Ok(tournament.competitors),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn record_result(
        &self,
        id: &TournamentId,
        category: &CategoryId,
        number: u32,
        competitor: &CompetitorId,
        times: Vec<f64>,
    ) -> Result<RoundResult, ServiceError> {
        let result = self
            .modify(id, |tournament| {
                let found = tournament
                    .category(category)
                    .ok_or_else(|| category_not_found(category))?;
                require_format(found, CategoryFormat::Wca)?;
                if found.round(number).is_none() {
                    return Err(round_not_found(number));
                }

                entered_competitor(tournament, competitor, category)?;

                let round = category_mut(tournament, category)?
                    .round_mut(number)
                    .ok_or_else(|| round_not_found(number))?;

                Ok(round.upsert_result(competitor.clone(), times).clone())
            })
            .await?;

        info!(
            "Recorded result for {competitor} in {category} round {number}: best {:.2}, average {:.2}",
            result.best, result.average
        );

        Ok(result)
    }

    pub async fn standings(
        &self,
        id: &TournamentId,
        category: &CategoryId,
        number: u32,
    ) -> Result<Standings, ServiceError> {
        let tournament = self.get_tournament(id).await?;

        let found = tournament
            .category(category)
            .ok_or_else(|| category_not_found(category))?;
        require_format(found, CategoryFormat::Wca)?;
        let round = found.round(number).ok_or_else(|| round_not_found(number))?;

        let rows = rank_round(&round.results)
            .into_iter()
            .map(|ranked| StandingRow {
                rank: ranked.rank,
                competitor: tournament
                    .competitor_name(&ranked.result.competitor_id)
                    .unwrap_or("(removed competitor)")
                    .to_owned(),
                result: ranked.result.clone(),
            })
            .collect();

        Ok(Standings {
            tournament: tournament.name.clone(),
            category: found.name.clone(),
            round: round.number,
            format: round.format,
            rows,
        })
    }

    /// Match slots for a head-to-head duel between two entrants of a Red Bull category.
    pub async fn head_to_head_slots(
        &self,
        id: &TournamentId,
        category: &CategoryId,
        first: &CompetitorId,
        second: &CompetitorId,
    ) -> Result<(MatchSlot, MatchSlot), ServiceError> {
        let tournament = self.get_tournament(id).await?;

        let found = tournament
            .category(category)
            .ok_or_else(|| category_not_found(category))?;
        require_format(found, CategoryFormat::RedBull)?;

        let first = entered_competitor(&tournament, first, category)?;
        let second = entered_competitor(&tournament, second, category)?;

        Ok((
            MatchSlot::new(first.id.clone(), first.name.clone()),
            MatchSlot::new(second.id.clone(), second.name.clone()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::{
        models::TournamentStatus,
        repository::{DocumentRepository, MemoryStore},
    };

    fn service() -> TournamentService {
        TournamentService::new(Arc::new(DocumentRepository::new(MemoryStore::default())))
    }

    async fn with_tournament(service: &TournamentService) -> TournamentId {
        service
            .create_tournament(NewTournament {
                name: "Spring Open".to_owned(),
                date: Some(date!(2025 - 03 - 14)),
                ..Default::default()
            })
            .await
            .unwrap()
            .id
    }

    #[test_log::test(tokio::test)]
    async fn creating_tournaments() {
        let service = service();

        let first = with_tournament(&service).await;
        let second = with_tournament(&service).await;

        assert_eq!(first, TournamentId::from("SpringOpen"));
        assert_eq!(second, TournamentId::from("SpringOpen-2"));
        assert_eq!(service.list_tournaments().await.unwrap().len(), 2);

        let stored = service.get_tournament(&first).await.unwrap();
        assert_eq!(stored.status, TournamentStatus::Upcoming);
        assert_eq!(stored.date, date!(2025 - 03 - 14));
    }

    #[test_log::test(tokio::test)]
    async fn empty_names_are_rejected() {
        let service = service();

        let result = service
            .create_tournament(NewTournament {
                name: "   ".to_owned(),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(ServiceError::EmptyName)));
    }

    #[test_log::test(tokio::test)]
    async fn unknown_tournament() {
        let service = service();
        let missing = TournamentId::from("Nope");

        let result = service
            .add_category(&missing, "3x3", CategoryFormat::Wca, None)
            .await;

        assert!(matches!(result, Err(ServiceError::TournamentNotFound(id)) if id == missing));
        assert!(service.list_tournaments().await.unwrap().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn editing_the_header() {
        let service = service();
        let id = with_tournament(&service).await;

        let updated = service
            .update_tournament(
                &id,
                TournamentChanges {
                    status: Some(TournamentStatus::Active),
                    location: Some("Puebla".to_owned()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, TournamentStatus::Active);
        assert_eq!(updated.name, "Spring Open");
        assert_eq!(service.get_tournament(&id).await.unwrap(), updated);
    }

    #[test_log::test(tokio::test)]
    async fn recording_and_ranking_results() {
        let service = service();
        let id = with_tournament(&service).await;

        let category = service
            .add_category(&id, "3x3", CategoryFormat::Wca, Some(RoundFormat::Ao5))
            .await
            .unwrap();
        assert_eq!(category.id, CategoryId::from("3x3"));

        let ana = service
            .register_competitor(&id, "Ana", Some(&category.id))
            .await
            .unwrap();
        let beto = service
            .register_competitor(&id, "Beto", Some(&category.id))
            .await
            .unwrap();
        let carla = service
            .register_competitor(&id, "Carla", Some(&category.id))
            .await
            .unwrap();

        let result = service
            .record_result(
                &id,
                &category.id,
                1,
                &ana.id,
                vec![12.34, 11.00, 13.00, 10.00, 14.00],
            )
            .await
            .unwrap();
        assert_eq!(format!("{:.2}", result.average), "12.11");
        assert_eq!(result.best, 10.0);

        service
            .record_result(&id, &category.id, 1, &beto.id, vec![9.0, 9.0, 0.0, 9.0, 9.0])
            .await
            .unwrap();
        service
            .record_result(&id, &category.id, 1, &carla.id, vec![9.0; 5])
            .await
            .unwrap();

        let standings = service.standings(&id, &category.id, 1).await.unwrap();
        let order: Vec<_> = standings
            .rows
            .iter()
            .map(|row| (row.rank, row.competitor.as_str()))
            .collect();

        assert_eq!(
            order,
            vec![(Some(1), "Carla"), (Some(2), "Ana"), (None, "Beto")]
        );
        assert_eq!(standings.format, RoundFormat::Ao5);
    }

    #[test_log::test(tokio::test)]
    async fn re_recording_replaces_the_result() {
        let service = service();
        let id = with_tournament(&service).await;
        let category = service
            .add_category(&id, "2x2", CategoryFormat::Wca, Some(RoundFormat::Ao3))
            .await
            .unwrap();
        let ana = service
            .register_competitor(&id, "Ana", Some(&category.id))
            .await
            .unwrap();

        service
            .record_result(&id, &category.id, 1, &ana.id, vec![5.0, 5.0, 5.0])
            .await
            .unwrap();
        service
            .record_result(&id, &category.id, 1, &ana.id, vec![4.0, 4.0, 4.0])
            .await
            .unwrap();

        let tournament = service.get_tournament(&id).await.unwrap();
        let results = &tournament.categories[0].rounds[0].results;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].average, 4.0);
    }

    #[test_log::test(tokio::test)]
    async fn results_need_an_entered_competitor() {
        let service = service();
        let id = with_tournament(&service).await;
        let category = service
            .add_category(&id, "3x3", CategoryFormat::Wca, None)
            .await
            .unwrap();
        let ana = service.register_competitor(&id, "Ana", None).await.unwrap();

        let result = service
            .record_result(&id, &category.id, 1, &ana.id, vec![1.0; 5])
            .await;
        assert!(matches!(result, Err(ServiceError::NotEntered { .. })));

        let result = service
            .record_result(&id, &category.id, 2, &ana.id, vec![1.0; 5])
            .await;
        assert!(matches!(result, Err(ServiceError::RoundNotFound(2))));

        let result = service
            .record_result(&id, &category.id, 1, &CompetitorId::from("99"), vec![1.0; 5])
            .await;
        assert!(matches!(result, Err(ServiceError::CompetitorNotFound(_))));

        assert!(service.enter_category(&id, &ana.id, &category.id).await.unwrap());
        assert!(!service.enter_category(&id, &ana.id, &category.id).await.unwrap());

        service
            .record_result(&id, &category.id, 1, &ana.id, vec![1.0; 5])
            .await
            .unwrap();
    }

    #[test_log::test(tokio::test)]
    async fn memberships_stay_inside_the_tournament() {
        let service = service();
        let id = with_tournament(&service).await;
        let ana = service.register_competitor(&id, "Ana", None).await.unwrap();

        let result = service
            .enter_category(&id, &ana.id, &CategoryId::from("ghost"))
            .await;
        assert!(matches!(result, Err(ServiceError::CategoryNotFound(_))));

        let result = service
            .register_competitor(&id, "Beto", Some(&CategoryId::from("ghost")))
            .await;
        assert!(matches!(result, Err(ServiceError::CategoryNotFound(_))));
        assert_eq!(service.competitors(&id, None).await.unwrap().len(), 1);
    }

    #[test_log::test(tokio::test)]
    async fn rounds_in_wca_categories() {
        let service = service();
        let id = with_tournament(&service).await;
        let wca = service
            .add_category(&id, "3x3", CategoryFormat::Wca, None)
            .await
            .unwrap();
        let redbull = service
            .add_category(&id, "3x3", CategoryFormat::RedBull, None)
            .await
            .unwrap();
        assert_eq!(redbull.id, CategoryId::from("3x3-2"));

        let round = service
            .add_round(&id, &wca.id, RoundFormat::Ao3)
            .await
            .unwrap();
        assert_eq!(round.number, 2);

        let result = service.add_round(&id, &redbull.id, RoundFormat::Ao3).await;
        assert!(matches!(
            result,
            Err(ServiceError::WrongCategoryFormat {
                format: CategoryFormat::RedBull,
                ..
            })
        ));

        let round = service
            .set_round_format(&id, &wca.id, 2, RoundFormat::Ao5)
            .await
            .unwrap();
        assert_eq!(round.format, RoundFormat::Ao5);

        service.remove_round(&id, &wca.id, 1).await.unwrap();
        let tournament = service.get_tournament(&id).await.unwrap();
        let numbers: Vec<u32> = tournament.categories[0]
            .rounds
            .iter()
            .map(|r| r.number)
            .collect();
        assert_eq!(numbers, vec![2]);
    }

    #[test_log::test(tokio::test)]
    async fn removing_things() {
        let service = service();
        let id = with_tournament(&service).await;
        let category = service
            .add_category(&id, "3x3", CategoryFormat::Wca, Some(RoundFormat::Ao3))
            .await
            .unwrap();
        let ana = service
            .register_competitor(&id, "Ana", Some(&category.id))
            .await
            .unwrap();
        service
            .record_result(&id, &category.id, 1, &ana.id, vec![3.0, 3.0, 3.0])
            .await
            .unwrap();

        service.remove_competitor(&id, &ana.id).await.unwrap();
        let standings = service.standings(&id, &category.id, 1).await.unwrap();
        assert!(standings.rows.is_empty());

        let beto = service
            .register_competitor(&id, "Beto", Some(&category.id))
            .await
            .unwrap();
        assert_eq!(beto.id, CompetitorId::from("1"));

        service.remove_category(&id, &category.id).await.unwrap();
        let competitors = service.competitors(&id, None).await.unwrap();
        assert!(competitors[0].categories.is_empty());

        let result = service.remove_category(&id, &category.id).await;
        assert!(matches!(result, Err(ServiceError::CategoryNotFound(_))));
    }

    #[test_log::test(tokio::test)]
    async fn head_to_head_needs_redbull_entrants() {
        let service = service();
        let id = with_tournament(&service).await;
        let wca = service
            .add_category(&id, "3x3", CategoryFormat::Wca, None)
            .await
            .unwrap();
        let redbull = service
            .add_category(&id, "Red Bull", CategoryFormat::RedBull, None)
            .await
            .unwrap();
        let ana = service
            .register_competitor(&id, "Ana", Some(&redbull.id))
            .await
            .unwrap();
        let beto = service
            .register_competitor(&id, "Beto", Some(&redbull.id))
            .await
            .unwrap();

        let (first, second) = service
            .head_to_head_slots(&id, &redbull.id, &ana.id, &beto.id)
            .await
            .unwrap();
        assert_eq!(first.name, "Ana");
        assert_eq!(second.name, "Beto");

        let result = service
            .head_to_head_slots(&id, &wca.id, &ana.id, &beto.id)
            .await;
        assert!(matches!(
            result,
            Err(ServiceError::WrongCategoryFormat { .. })
        ));
    }

    #[test_log::test(tokio::test)]
    async fn switching_to_redbull_drops_rounds() {
        let service = service();
        let id = with_tournament(&service).await;
        let category = service
            .add_category(&id, "3x3", CategoryFormat::Wca, Some(RoundFormat::Ao3))
            .await
            .unwrap();
        let ana = service
            .register_competitor(&id, "Ana", Some(&category.id))
            .await
            .unwrap();
        service
            .record_result(&id, &category.id, 1, &ana.id, vec![3.0, 3.0, 3.0])
            .await
            .unwrap();

        let switched = service
            .set_category_format(&id, &category.id, CategoryFormat::RedBull)
            .await
            .unwrap();
        assert!(switched.rounds.is_empty());

        let result = service.standings(&id, &category.id, 1).await;
        assert!(matches!(
            result,
            Err(ServiceError::WrongCategoryFormat {
                format: CategoryFormat::RedBull,
                ..
            })
        ));
    }

    #[test_log::test(tokio::test)]
    async fn stored_redbull_rounds_have_no_standings() {
        let service = TournamentService::new(Arc::new(DocumentRepository::new(
            MemoryStore::with_document(
                r#"[{
                    "id": "SpringOpen",
                    "name": "Spring Open",
                    "status": "activo",
                    "date": "2025-03-14",
                    "categories": [{
                        "id": "3x3",
                        "name": "3x3",
                        "format": "redbull",
                        "rounds": [{ "num": 1, "format": "ao5", "results": [] }]
                    }],
                    "competitors": []
                }]"#,
            ),
        )));

        let result = service
            .standings(&TournamentId::from("SpringOpen"), &CategoryId::from("3x3"), 1)
            .await;
        assert!(matches!(
            result,
            Err(ServiceError::WrongCategoryFormat { .. })
        ));
    }

    #[test_log::test(tokio::test)]
    async fn round_numbers_can_run_out() {
        let service = TournamentService::new(Arc::new(DocumentRepository::new(
            MemoryStore::with_document(
                r#"[{
                    "id": "SpringOpen",
                    "name": "Spring Open",
                    "status": "activo",
                    "date": "2025-03-14",
                    "categories": [{
                        "id": "3x3",
                        "name": "3x3",
                        "format": "wca",
                        "rounds": [{ "num": 4294967295, "format": "ao5", "results": [] }]
                    }],
                    "competitors": []
                }]"#,
            ),
        )));

        let id = TournamentId::from("SpringOpen");
        let result = service
            .add_round(&id, &CategoryId::from("3x3"), RoundFormat::Ao5)
            .await;
        assert!(matches!(
            result,
            Err(ServiceError::RoundNumbersExhausted(u32::MAX))
        ));

        let tournament = service.get_tournament(&id).await.unwrap();
        assert_eq!(tournament.categories[0].rounds.len(), 1);
    }
}
