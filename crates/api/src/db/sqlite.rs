use std::{str::FromStr, time::Duration};

use async_trait::async_trait;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::{ClimateStore, Error, Measurement, MeasurementFilter, Station};

/// Columns the query layer depends on; checked once at startup so a wrong
/// or stale dataset file fails fast instead of at the first request.
const MEASUREMENT_COLUMNS: &[&str] = &["station", "date", "prcp", "tobs"];
const STATION_COLUMNS: &[&str] = &["id", "station", "name", "latitude", "longitude", "elevation"];

/// [`ClimateStore`] backed by the pre-built SQLite dataset file.
///
/// The pool is opened read-only; each request acquires a connection per
/// query and releases it on every exit path.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn connect(path: &str) -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?.read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        verify_schema(&pool).await?;
        info!("SQLite dataset opened read-only at: {}", path);

        Ok(Self { pool })
    }
}

async fn verify_schema(pool: &SqlitePool) -> Result<(), Error> {
    for (table, required) in [
        ("measurement", MEASUREMENT_COLUMNS),
        ("station", STATION_COLUMNS),
    ] {
        let columns: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?1)")
            .bind(table)
            .fetch_all(pool)
            .await?;

        if columns.is_empty() {
            return Err(Error::MissingTable {
                table: table.to_owned(),
            });
        }

        for &column in required {
            if !columns.iter().any(|c| c == column) {
                return Err(Error::MissingColumn {
                    table: table.to_owned(),
                    column: column.to_owned(),
                });
            }
        }
    }

    Ok(())
}

#[async_trait]
impl ClimateStore for SqliteStore {
    async fn measurements(&self, filter: &MeasurementFilter) -> Result<Vec<Measurement>, Error> {
        let mut sql = String::from(
            "SELECT station AS station_code, date, prcp AS precipitation, tobs AS temperature \
             FROM measurement",
        );

        let mut clauses: Vec<&str> = Vec::new();
        if filter.station_code.is_some() {
            clauses.push("station = ?");
        }
        if filter.date_from.is_some() {
            clauses.push("date >= ?");
        }
        if filter.date_to.is_some() {
            clauses.push("date <= ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY date ASC");

        let mut query = sqlx::query_as::<_, Measurement>(&sql);
        // Bind order mirrors clause order above
        for value in [&filter.station_code, &filter.date_from, &filter.date_to]
            .into_iter()
            .flatten()
        {
            query = query.bind(value.as_str());
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn stations(&self) -> Result<Vec<Station>, Error> {
        let stations = sqlx::query_as::<_, Station>(
            "SELECT id, station AS code, name, latitude, longitude, elevation \
             FROM station ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(stations)
    }
}
