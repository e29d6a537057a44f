use crate::analysis::pool::Roster;
use crate::error::AppError;
use serde::Deserialize;

// Champion select session (lol-champ-select/v1/session), trimmed to the
// fields the evaluator consumes.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChampSelectSession {
    #[serde(default)]
    pub my_team: Vec<TeamMemberDto>,
    #[serde(default)]
    pub bench_champions: Vec<BenchChampionDto>,
    #[serde(default)]
    pub local_player_cell_id: Option<i64>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberDto {
    #[serde(default)]
    pub cell_id: i64,
    #[serde(default)]
    pub champion_id: i64,
    #[serde(default)]
    pub puuid: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BenchChampionDto {
    #[serde(default)]
    pub champion_id: i64,
}

impl ChampSelectSession {
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json)
            .map_err(|e| AppError::JsonError(format!("Failed to parse champion select session: {}", e)))
    }

    /// Groups champion ids into team, bench and player. Slots without a
    /// champion (id 0) are skipped. The player is matched by `puuid` when
    /// given, otherwise by the local player's cell id.
    pub fn to_roster(&self, puuid: Option<&str>) -> Roster {
        let mut roster = Roster::default();

        for member in self.my_team.iter().filter(|m| m.champion_id != 0) {
            let is_player = match puuid {
                Some(puuid) => member.puuid == puuid,
                None => self.local_player_cell_id == Some(member.cell_id),
            };
            if is_player {
                roster.player.push(member.champion_id.to_string());
            }
            roster.team.push(member.champion_id.to_string());
        }

        roster.bench = self
            .bench_champions
            .iter()
            .filter(|b| b.champion_id != 0)
            .map(|b| b.champion_id.to_string())
            .collect();

        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SESSION: &str = r#"{
        "localPlayerCellId": 2,
        "myTeam": [
            {"cellId": 0, "championId": 136, "puuid": "aaa"},
            {"cellId": 1, "championId": 64, "puuid": "bbb"},
            {"cellId": 2, "championId": 498, "puuid": "me"},
            {"cellId": 3, "championId": 0, "puuid": "ccc"},
            {"cellId": 4, "championId": 875, "puuid": "ddd"}
        ],
        "benchChampions": [
            {"championId": 203, "isPriority": false},
            {"championId": 0},
            {"championId": 517}
        ],
        "timer": {"phase": "BAN_PICK"}
    }"#;

    #[test]
    fn groups_by_puuid() {
        let session = ChampSelectSession::from_json_str(SESSION).unwrap();
        let roster = session.to_roster(Some("bbb"));

        assert_eq!(roster.team, vec!["136", "64", "498", "875"]);
        assert_eq!(roster.bench, vec!["203", "517"]);
        assert_eq!(roster.player, vec!["64"]);
    }

    #[test]
    fn falls_back_to_local_cell() {
        let session = ChampSelectSession::from_json_str(SESSION).unwrap();
        let roster = session.to_roster(None);
        assert_eq!(roster.player, vec!["498"]);
    }

    #[test]
    fn unknown_puuid_leaves_player_empty() {
        let session = ChampSelectSession::from_json_str(SESSION).unwrap();
        assert!(session.to_roster(Some("nobody")).player.is_empty());
    }

    #[test]
    fn empty_session() {
        let session = ChampSelectSession::from_json_str("{}").unwrap();
        assert_eq!(session.to_roster(None), Roster::default());
    }
}
