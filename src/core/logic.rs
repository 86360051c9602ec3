use crate::config::Config;
use crate::core::reconcile::build_view;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::client::ClientRecord;
use crate::roster;

pub struct Core;

impl Core {
    /// Load both stores and reconcile. One cold read of the roster files,
    /// one warm snapshot of the override store, one pure merge.
    pub fn reconciled_view(pool: &mut DbPool, cfg: &Config) -> AppResult<Vec<ClientRecord>> {
        let people = roster::load_people(cfg)?;
        let companies = roster::load_companies(cfg)?;
        let snapshot = queries::get_all(&pool.conn)?;

        Ok(build_view(&people, &companies, &snapshot))
    }
}
