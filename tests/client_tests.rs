use chesscom::testing_utils::{FakeTransport, fixtures};
use chesscom::{ChessCom, ChessError, GameResult, ModeStats, Title};
use serde_json::json;

const BASE: &str = "https://api.chess.com/pub";

fn client(transport: FakeTransport) -> ChessCom<FakeTransport> {
    ChessCom::with_transport(transport, BASE)
}

#[test]
fn test_club_details_end_to_end() {
    let chess = client(FakeTransport::new().with_json(
        format!("{BASE}/club/chess-com-developer-community"),
        fixtures::club_details(),
    ));

    let club = chess
        .clubs()
        .details("chess-com-developer-community")
        .unwrap();

    assert_eq!(
        club.id,
        "https://api.chess.com/pub/club/chess-com-developer-community"
    );
    assert_eq!(club.members_count, 3364);
    assert_eq!(club.visibility, "public");
}

#[test]
fn test_monthly_archive_pads_month_and_rewrites_sides() {
    let chess = client(FakeTransport::new().with_json(
        format!("{BASE}/player/erik/games/2020/05"),
        fixtures::monthly_archive(),
    ));

    let games = chess.players().monthly_archive("erik", 2020, 5).unwrap();

    assert_eq!(
        chess.transport().requests(),
        ["https://api.chess.com/pub/player/erik/games/2020/05"]
    );
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].white.id, "https://api.chess.com/pub/player/erik");
    assert_eq!(games[0].black.id, "https://api.chess.com/pub/player/hikaru");
    assert_eq!(games[0].black.result, GameResult::Win);
}

#[test]
fn test_invalid_country_code_never_requests() {
    let chess = client(FakeTransport::new());

    let err = chess.countries().details("AUS").unwrap_err();

    assert!(matches!(
        err,
        ChessError::InvalidParameter { ref parameter, .. } if parameter == "country_code"
    ));
    assert!(chess.transport().requests().is_empty());
}

#[test]
fn test_country_code_is_uppercased() {
    let chess = client(FakeTransport::new().with_json(
        format!("{BASE}/country/AU"),
        json!({
            "@id": "https://api.chess.com/pub/country/AU",
            "name": "Australia",
            "code": "AU"
        }),
    ));

    let country = chess.countries().details("au").unwrap();
    assert_eq!(country.name, "Australia");
    assert_eq!(country.id, "https://api.chess.com/pub/country/AU");
}

#[test]
fn test_invalid_month_never_requests() {
    let chess = client(FakeTransport::new());

    assert!(matches!(
        chess.players().monthly_archive("erik", 2020, 13),
        Err(ChessError::InvalidParameter { .. })
    ));
    assert!(matches!(
        chess.players().profile("erik/stats"),
        Err(ChessError::InvalidParameter { .. })
    ));
    assert!(chess.transport().requests().is_empty());
}

#[test]
fn test_player_stats_through_client() {
    let chess = client(
        FakeTransport::new().with_json(format!("{BASE}/player/erik/stats"), fixtures::player_stats()),
    );

    let stats = chess.players().stats("erik").unwrap();

    assert_eq!(
        stats.names().collect::<Vec<_>>(),
        ["chess_daily", "chess_blitz", "fide", "tactics"]
    );
    let daily = stats.get("chess_daily").and_then(ModeStats::as_chess).unwrap();
    assert_eq!(daily.tournament.as_ref().map(|t| t.highest_finish), Some(1));
}

#[test]
fn test_club_matches_buckets_through_client() {
    let chess = client(FakeTransport::new().with_json(
        format!("{BASE}/club/chess-com-developer-community/matches"),
        fixtures::club_matches(),
    ));

    let matches = chess
        .clubs()
        .matches("chess-com-developer-community")
        .unwrap();

    assert_eq!(matches.counts(), (2, 0, 1));
    assert_eq!(matches.finished[1].id, "https://api.chess.com/pub/match/12804");
    assert_eq!(matches.registered[0].name, "Open Registration");
}

#[test]
fn test_is_online_envelope() {
    let chess = client(
        FakeTransport::new()
            .with_json(format!("{BASE}/player/erik/is-online"), json!({"online": true}))
            .with_json(format!("{BASE}/player/hikaru/is-online"), json!({"online": "yes"}))
            .with_json(format!("{BASE}/player/magnus/is-online"), json!({})),
    );

    assert!(chess.players().is_online("erik").unwrap());
    assert!(matches!(
        chess.players().is_online("hikaru"),
        Err(ChessError::TypeCoercion { schema: "PlayerOnline", .. })
    ));
    assert!(matches!(
        chess.players().is_online("magnus"),
        Err(ChessError::UnexpectedShape { schema: "PlayerOnline", .. })
    ));
}

#[test]
fn test_list_envelope_missing_key() {
    let chess = client(FakeTransport::new().with_json(
        format!("{BASE}/player/erik/games/2020/05"),
        json!({"archives": []}),
    ));

    let err = chess.players().monthly_archive("erik", 2020, 5).unwrap_err();
    assert!(matches!(err, ChessError::UnexpectedShape { schema: "ArchivedGame", .. }));
    assert!(err.is_schema_error());
}

#[test]
fn test_titled_usernames_per_title() {
    let chess = client(
        FakeTransport::new()
            .with_json(format!("{BASE}/titled/GM"), json!({"players": ["hikaru", "magnuscarlsen"]}))
            .with_json(format!("{BASE}/titled/WIM"), json!({"players": []})),
    );

    let lists = chess
        .titled()
        .usernames_for(&[Title::Gm, Title::Wim])
        .unwrap();

    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].0, Title::Gm);
    assert_eq!(lists[0].1, ["hikaru", "magnuscarlsen"]);
    assert!(lists[1].1.is_empty());
}

#[test]
fn test_titled_stops_at_first_failure() {
    let chess = client(FakeTransport::new());

    let result = chess.titled().usernames_for(&[Title::Nm, Title::Gm]);

    assert!(matches!(result, Err(ChessError::ApiNotFound { .. })));
    assert_eq!(chess.transport().requests(), [format!("{BASE}/titled/NM")]);
}

#[test]
fn test_match_board_through_client() {
    let chess = client(
        FakeTransport::new().with_json(format!("{BASE}/match/12803/1"), fixtures::match_board()),
    );

    let board = chess.matches().board("12803", 1).unwrap();
    assert_eq!(board.board_scores.player1, 1.5);
    assert_eq!(board.games[1].white.result, Some(GameResult::Agreed));

    assert!(matches!(
        chess.matches().board("12803", 0),
        Err(ChessError::InvalidParameter { .. })
    ));
}

#[test]
fn test_monthly_pgn_through_client() {
    let pgn = "[Event \"Live Chess\"]\n[White \"erik\"]\n[Black \"hikaru\"]\n[Result \"1-0\"]\n\n1. e4 e5 2. Qh5 Nc6 3. Bc4 Nf6 4. Qxf7# 1-0\n\n\
               [Event \"Live Chess\"]\n[White \"hikaru\"]\n[Black \"erik\"]\n[Result \"1/2-1/2\"]\n\n1. d4 d5 1/2-1/2\n";
    let chess = client(
        FakeTransport::new().with_text(format!("{BASE}/player/erik/games/2021/01/pgn"), pgn),
    );

    let games = chess
        .players()
        .monthly_pgn("erik", 2021, 1)
        .unwrap()
        .to_vec()
        .unwrap();

    assert_eq!(games.len(), 2);
    assert_eq!(games[0].header("White"), Some("erik"));
    assert_eq!(games[0].moves.last().map(String::as_str), Some("Qxf7#"));
    assert_eq!(games[1].outcome.as_deref(), Some("1/2-1/2"));
}

#[test]
fn test_missing_resource_is_not_found() {
    let chess = client(FakeTransport::new());

    let err = chess.tournaments().details("no-such-event").unwrap_err();
    assert!(matches!(err, ChessError::ApiNotFound { ref url, .. } if url.ends_with("/tournament/no-such-event")));
}

#[test]
fn test_daily_match_without_self_reference_through_client() {
    let mut payload = fixtures::daily_match();
    payload.as_object_mut().unwrap().remove("@id");
    let chess = client(FakeTransport::new().with_json(format!("{BASE}/match/12803"), payload));

    let daily = chess.matches().daily("12803").unwrap();

    assert_eq!(daily.id, None);
    assert_eq!(daily.name, "Friendly 5|2");
}
