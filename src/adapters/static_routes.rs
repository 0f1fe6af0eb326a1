use crate::adapters::builtin_routes::BUILTIN_ROUTES;
use crate::domain::model::Route;
use crate::domain::ports::DistanceProvider;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::validate_non_negative;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

/// 本地路線表，不依賴任何外部 API
#[derive(Debug, Clone)]
pub struct StaticRouteTable {
    routes: Vec<Route>,
}

fn normalize(city: &str) -> String {
    city.trim().to_lowercase()
}

impl StaticRouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn builtin() -> Self {
        let routes = BUILTIN_ROUTES
            .iter()
            .map(|(origin, destination, distance_km)| Route {
                origin: origin.to_string(),
                destination: destination.to_string(),
                distance_km: *distance_km,
            })
            .collect();
        Self::new(routes)
    }

    /// 從 CSV 檔案載入（欄位：origin,destination,distance_km）
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(&path)?;
        let table = Self::from_csv_reader(file)?;
        tracing::debug!(
            "Loaded {} routes from {}",
            table.routes.len(),
            path.as_ref().display()
        );
        Ok(table)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut routes = Vec::new();
        for (index, row) in csv_reader.deserialize::<Route>().enumerate() {
            let route = row?;
            validate_non_negative(&format!("routes[{}].distance_km", index), route.distance_km)?;
            if route.origin.is_empty() || route.destination.is_empty() {
                return Err(CalcError::ValidationError {
                    message: format!("Route {} has an empty city name", index + 1),
                });
            }
            routes.push(route);
        }

        Ok(Self::new(routes))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// 雙向查詢，忽略大小寫與前後空白
    pub fn lookup(&self, origin: &str, destination: &str) -> Option<f64> {
        let origin = normalize(origin);
        let destination = normalize(destination);

        self.routes
            .iter()
            .find(|route| {
                let route_origin = normalize(&route.origin);
                let route_destination = normalize(&route.destination);
                (route_origin == origin && route_destination == destination)
                    || (route_origin == destination && route_destination == origin)
            })
            .map(|route| route.distance_km)
    }

    /// 所有不重複的城市，依字母排序
    pub fn all_cities(&self) -> Vec<String> {
        self.routes
            .iter()
            .flat_map(|route| [route.origin.clone(), route.destination.clone()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Default for StaticRouteTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[async_trait]
impl DistanceProvider for StaticRouteTable {
    async fn find_distance(&self, origin: &str, destination: &str) -> Result<Option<f64>> {
        Ok(self.lookup(origin, destination))
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_directions() {
        let table = StaticRouteTable::builtin();
        assert_eq!(table.lookup("São Paulo, SP", "Campinas, SP"), Some(99.0));
        assert_eq!(table.lookup("Campinas, SP", "São Paulo, SP"), Some(99.0));
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        let table = StaticRouteTable::builtin();
        assert_eq!(table.lookup("  RECIFE, pe ", "joão pessoa, pb"), Some(120.0));
        assert_eq!(table.lookup("são paulo, sp", "SANTOS, SP"), Some(72.0));
    }

    #[test]
    fn test_lookup_not_found() {
        let table = StaticRouteTable::builtin();
        assert_eq!(table.lookup("Campinas, SP", "Santos, SP"), None);
        assert_eq!(table.lookup("", "Santos, SP"), None);
    }

    #[test]
    fn test_all_cities_sorted_and_unique() {
        let cities = StaticRouteTable::builtin().all_cities();
        assert_eq!(cities.len(), 31);
        assert!(cities.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(cities.first().map(String::as_str), Some("Aracaju, SE"));
        assert!(cities.contains(&"Mossoró, RN".to_string()));
    }

    #[test]
    fn test_load_from_csv() {
        let data = "origin,destination,distance_km\nLisboa,Porto, 313\nPorto,Braga,55.5\n";
        let table = StaticRouteTable::from_csv_reader(data.as_bytes()).unwrap();

        assert_eq!(table.routes().len(), 2);
        assert_eq!(table.lookup("braga", "porto"), Some(55.5));
        assert_eq!(table.all_cities(), vec!["Braga", "Lisboa", "Porto"]);
    }

    #[test]
    fn test_csv_rejects_negative_distance() {
        let data = "origin,destination,distance_km\nLisboa,Porto,-313\n";
        assert!(StaticRouteTable::from_csv_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_csv_rejects_malformed_rows() {
        let data = "origin,destination,distance_km\nLisboa,Porto,far\n";
        let err = StaticRouteTable::from_csv_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CalcError::CsvError(_)));
    }

    #[test]
    fn test_find_distance_via_port() {
        let table = StaticRouteTable::builtin();
        let distance =
            tokio_test::block_on(table.find_distance("Manaus, AM", "Belém, PA")).unwrap();
        assert_eq!(distance, Some(1427.0));
        assert_eq!(table.name(), "static");
    }
}
