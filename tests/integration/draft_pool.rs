use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_point_value_out_of_range() {
    let project = TestProject::new();

    for value in ["0", "21", "-1"] {
        project
            .leagueops()
            .args(["draft-pool", value])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("outside 1..=20"));
    }
}

#[test]
fn test_remote_project_requires_service_key() {
    let project = TestProject::new();

    project
        .leagueops()
        .args(["draft-pool", "15"])
        .env("NEXT_PUBLIC_SUPABASE_URL", "https://abcd.supabase.co")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SUPABASE_SERVICE_ROLE_KEY"));
}

#[test]
fn test_non_numeric_point_value_exits_one() {
    let project = TestProject::new();

    project
        .leagueops()
        .args(["draft-pool", "fifteen"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'fifteen' is not a whole number"));
}
