//! 需要真实 Redis 的测试默认忽略，设置 REDIS_URL 后用 `cargo test -- --ignored` 运行

use std::collections::HashSet;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use didaoa::cache::{CacheError, InsertPosition, KeyType, RedisCache, SortOptions, Ttl};
use serde::{Deserialize, Serialize};

fn cache() -> RedisCache {
    let url = std::env::var("REDIS_URL").expect("REDIS_URL must be set");
    RedisCache::open(&url).unwrap()
}

/// 每个测试使用独立的键前缀
fn prefix(test: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("didaoa:test:{}:{}:{}", test, std::process::id(), nanos)
}

async fn cleanup(cache: &RedisCache, prefix: &str) {
    cache.remove_pattern(&format!("{}*", prefix)).await.unwrap();
}

#[tokio::test]
async fn test_unreachable_server_is_connection_failure() {
    let cache = RedisCache::open("redis://127.0.0.1:1/").unwrap();
    let err = cache.get("anything").await.unwrap_err();
    assert!(matches!(err, CacheError::ConnectionFailure(_)), "{:?}", err);
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_missing_key() {
    let cache = cache();
    let key = prefix("missing");

    assert!(!cache.exists(&key).await.unwrap());
    assert_eq!(cache.get(&key).await.unwrap(), None);
    assert!(matches!(cache.ttl(&key).await, Err(CacheError::NotFound(_))));
    assert_eq!(cache.key_type(&key).await.unwrap(), KeyType::None);
    assert_eq!(cache.remove_count(&key).await.unwrap(), 0);
    assert!(!cache.remove(&key).await.unwrap());
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_set_incr_get_scenario() {
    let cache = cache();
    let p = prefix("scenario");
    let a = format!("{}:a", p);

    cache.set(&a, "1").await.unwrap();
    assert_eq!(cache.get(&a).await.unwrap().as_deref(), Some("1"));
    assert_eq!(cache.incr(&a).await.unwrap(), 2);
    assert_eq!(cache.get(&a).await.unwrap().as_deref(), Some("2"));
    assert!(cache.exists(&a).await.unwrap());

    let counter = format!("{}:counter", p);
    assert_eq!(cache.incr_by(&counter, 5).await.unwrap(), 5);
    assert_eq!(cache.decr_by(&counter, 7).await.unwrap(), -2);
    assert_eq!(cache.decr(&counter).await.unwrap(), -3);

    assert_eq!(cache.remove_many(&[a.as_str(), counter.as_str()]).await.unwrap(), 2);
    cleanup(&cache, &p).await;
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_string_commands() {
    let cache = cache();
    let p = prefix("strings");
    let key = format!("{}:s", p);

    assert!(cache.set_nx(&key, "hello").await.unwrap());
    assert!(!cache.set_nx(&key, "other").await.unwrap());
    assert_eq!(cache.append(&key, " world").await.unwrap(), 11);
    assert_eq!(cache.get_range(&key, 0, 4).await.unwrap(), "hello");
    assert_eq!(cache.set_range(&key, 6, "redis").await.unwrap(), 11);
    assert_eq!(
        cache.get_set(&key, "new").await.unwrap().as_deref(),
        Some("hello redis")
    );
    assert_eq!(cache.get_bytes(&key).await.unwrap(), Some(b"new".to_vec()));

    let bin = format!("{}:bin", p);
    cache.set_bytes(&bin, &[0, 159, 146, 150]).await.unwrap();
    assert_eq!(cache.get_bytes(&bin).await.unwrap(), Some(vec![0, 159, 146, 150]));

    let bits = format!("{}:bits", p);
    assert!(!cache.set_bit(&bits, 7, true).await.unwrap());
    assert!(cache.get_bit(&bits, 7).await.unwrap());
    assert!(!cache.get_bit(&bits, 6).await.unwrap());
    assert!(cache.set_bit(&bits, 7, false).await.unwrap());

    cleanup(&cache, &p).await;
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_expiry() {
    let cache = cache();
    let p = prefix("expiry");
    let key = format!("{}:k", p);

    cache.set(&key, "v").await.unwrap();
    assert_eq!(cache.ttl(&key).await.unwrap(), Ttl::Persistent);

    cache.set_ex(&key, "v", 60).await.unwrap();
    match cache.ttl(&key).await.unwrap() {
        Ttl::Expires(n) => assert!(n > 0 && n <= 60),
        other => panic!("unexpected ttl {:?}", other),
    }

    let short = format!("{}:short", p);
    cache
        .set_with_expiry(&short, "v", Duration::from_secs(30))
        .await
        .unwrap();
    assert!(matches!(cache.ttl(&short).await.unwrap(), Ttl::Expires(n) if n <= 30));

    assert!(cache.expire(&key, 120).await.unwrap());
    let far_future = chrono::Utc::now().timestamp() + 3600;
    assert!(cache.expire_at(&key, far_future).await.unwrap());
    assert!(!cache.expire(&format!("{}:absent", p), 10).await.unwrap());

    cleanup(&cache, &p).await;
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    age: i32,
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_objects() {
    let cache = cache();
    let p = prefix("objects");
    let key = format!("{}:profile", p);
    let profile = Profile {
        name: "lxq".into(),
        age: 30,
    };

    cache.set_object(&key, &profile).await.unwrap();
    assert_eq!(cache.ttl(&key).await.unwrap(), Ttl::Persistent);
    cache.set_object_ex(&key, &profile, 60).await.unwrap();
    assert_eq!(cache.get_object::<Profile>(&key).await.unwrap(), profile);

    cache.set(&key, "not json").await.unwrap();
    assert!(matches!(
        cache.get_object::<Profile>(&key).await,
        Err(CacheError::SerializationError(_))
    ));
    assert!(matches!(
        cache.get_object::<Profile>(&format!("{}:absent", p)).await,
        Err(CacheError::NotFound(_))
    ));

    cleanup(&cache, &p).await;
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_hashes() {
    let cache = cache();
    let p = prefix("hashes");
    let key = format!("{}:h", p);

    assert!(cache.h_set(&key, "name", "lxq").await.unwrap());
    assert!(!cache.h_set(&key, "name", "zl").await.unwrap());
    assert!(!cache.h_set_nx(&key, "name", "other").await.unwrap());
    cache
        .h_mset(&key, &[("city", "wuhan"), ("visits", "1")])
        .await
        .unwrap();

    assert_eq!(cache.h_get(&key, "name").await.unwrap().as_deref(), Some("zl"));
    assert_eq!(
        cache.h_mget(&key, &["city", "nope", "name"]).await.unwrap(),
        vec![Some("wuhan".to_string()), None, Some("zl".to_string())]
    );
    assert_eq!(cache.h_incr_by(&key, "visits", 4).await.unwrap(), 5);
    assert!(cache.h_exists(&key, "city").await.unwrap());
    assert_eq!(cache.h_len(&key).await.unwrap(), 3);

    let fields: HashSet<String> = ["name", "city", "visits"].iter().map(|s| s.to_string()).collect();
    assert_eq!(cache.h_keys(&key).await.unwrap(), fields);
    assert_eq!(cache.h_vals(&key).await.unwrap().len(), 3);
    assert_eq!(cache.h_get_all(&key).await.unwrap()["visits"], "5");

    assert_eq!(cache.h_del(&key, &["city", "nope"]).await.unwrap(), 1);
    assert_eq!(cache.key_type(&key).await.unwrap(), KeyType::Hash);

    cleanup(&cache, &p).await;
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_lists() {
    let cache = cache();
    let p = prefix("lists");
    let key = format!("{}:l", p);

    assert_eq!(cache.r_push(&key, "b").await.unwrap(), 1);
    assert_eq!(cache.r_push(&key, "c").await.unwrap(), 2);
    assert_eq!(cache.l_push(&key, "a").await.unwrap(), 3);
    assert_eq!(cache.l_range(&key, 0, -1).await.unwrap(), vec!["a", "b", "c"]);

    assert_eq!(
        cache.l_insert(&key, InsertPosition::After, "b", "b2").await.unwrap(),
        4
    );
    assert_eq!(
        cache.l_insert(&key, InsertPosition::Before, "zz", "x").await.unwrap(),
        -1
    );
    assert_eq!(cache.l_index(&key, 2).await.unwrap().as_deref(), Some("b2"));
    assert_eq!(cache.l_index(&key, 10).await.unwrap(), None);

    cache.l_set(&key, 0, "A").await.unwrap();
    assert!(matches!(
        cache.l_set(&key, 99, "x").await,
        Err(CacheError::NotFound(_))
    ));
    assert!(matches!(
        cache.l_set(&format!("{}:absent", p), 0, "x").await,
        Err(CacheError::NotFound(_))
    ));

    cache.r_push(&key, "A").await.unwrap();
    assert_eq!(cache.l_rem(&key, 0, "A").await.unwrap(), 2);
    assert_eq!(cache.l_len(&key).await.unwrap(), 3);

    cache.l_trim(&key, 0, 1).await.unwrap();
    assert_eq!(cache.l_pop(&key).await.unwrap().as_deref(), Some("b"));
    assert_eq!(cache.r_pop(&key).await.unwrap().as_deref(), Some("b2"));
    assert_eq!(cache.r_pop(&key).await.unwrap(), None);

    cleanup(&cache, &p).await;
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_sets() {
    let cache = cache();
    let p = prefix("sets");
    let key = format!("{}:s", p);

    assert_eq!(cache.s_add(&key, "x").await.unwrap(), 1);
    assert_eq!(cache.s_add(&key, "x").await.unwrap(), 0);
    assert_eq!(cache.s_add(&key, "y").await.unwrap(), 1);
    assert_eq!(cache.s_card(&key).await.unwrap(), 2);
    assert!(cache.s_is_member(&key, "y").await.unwrap());

    let members = cache.s_members(&key).await.unwrap();
    assert_eq!(
        members,
        ["x", "y"].iter().map(|s| s.to_string()).collect::<HashSet<String>>()
    );

    let random = cache.s_rand_member(&key).await.unwrap().unwrap();
    assert!(members.contains(&random));

    assert_eq!(cache.s_rem(&key, "x").await.unwrap(), 1);
    assert_eq!(cache.s_pop(&key).await.unwrap().as_deref(), Some("y"));
    assert_eq!(cache.s_pop(&key).await.unwrap(), None);

    cleanup(&cache, &p).await;
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_sorted_sets() {
    let cache = cache();
    let p = prefix("zsets");
    let key = format!("{}:z", p);

    assert!(cache.z_add(&key, 2.0, "b").await.unwrap());
    assert!(cache.z_add(&key, 1.0, "a").await.unwrap());
    assert!(cache.z_add(&key, 3.0, "c").await.unwrap());
    assert!(!cache.z_add(&key, 3.5, "c").await.unwrap());

    assert_eq!(cache.z_range(&key, 0, -1).await.unwrap(), vec!["a", "b", "c"]);
    assert_eq!(cache.z_rev_range(&key, 0, -1).await.unwrap(), vec!["c", "b", "a"]);

    let with_scores = cache.z_range_with_scores(&key, 0, 0).await.unwrap();
    assert_eq!(with_scores[0].member, "a");
    assert_eq!(with_scores[0].score, 1.0);
    let rev_scores = cache.z_rev_range_with_scores(&key, 0, 0).await.unwrap();
    assert_eq!(rev_scores[0].score, 3.5);

    assert_eq!(cache.z_rank(&key, "c").await.unwrap(), Some(2));
    assert_eq!(cache.z_rev_rank(&key, "c").await.unwrap(), Some(0));
    assert_eq!(cache.z_rank(&key, "nope").await.unwrap(), None);
    assert_eq!(cache.z_score(&key, "b").await.unwrap(), Some(2.0));
    assert_eq!(cache.z_incr_by(&key, 0.5, "b").await.unwrap(), 2.5);
    assert_eq!(cache.z_card(&key).await.unwrap(), 3);
    assert_eq!(cache.z_count(&key, 2.0, 3.0).await.unwrap(), 1);

    assert_eq!(cache.z_range_by_score(&key, 1.0, 3.0).await.unwrap(), vec!["a", "b"]);
    assert_eq!(
        cache.z_range_by_score_limit(&key, 0.0, 10.0, 1, 1).await.unwrap(),
        vec!["b"]
    );
    assert_eq!(
        cache.z_rev_range_by_score(&key, 10.0, 0.0).await.unwrap(),
        vec!["c", "b", "a"]
    );
    assert_eq!(
        cache.z_rev_range_by_score_limit(&key, 10.0, 0.0, 0, 2).await.unwrap(),
        vec!["c", "b"]
    );

    let members: Vec<String> = cache
        .z_range_by_score_with_scores(&key, 0.0, 10.0)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.member)
        .collect();
    assert_eq!(members, vec!["a", "b", "c"]);
    assert_eq!(
        cache
            .z_range_by_score_with_scores_limit(&key, 0.0, 10.0, 2, 5)
            .await
            .unwrap()
            .len(),
        1
    );
    let rev = cache.z_rev_range_by_score_with_scores(&key, 10.0, 0.0).await.unwrap();
    assert!(rev.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(
        cache
            .z_rev_range_by_score_with_scores_limit(&key, 10.0, 0.0, 0, 1)
            .await
            .unwrap()[0]
            .member,
        "c"
    );

    assert_eq!(cache.z_rem(&key, "a").await.unwrap(), 1);
    assert_eq!(cache.z_rem_range_by_score(&key, 0.0, 3.0).await.unwrap(), 1);
    assert_eq!(cache.z_range(&key, 0, -1).await.unwrap(), vec!["c"]);

    cleanup(&cache, &p).await;
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_sort_and_wrong_type() {
    let cache = cache();
    let p = prefix("sort");
    let key = format!("{}:ids", p);

    for id in ["3", "1", "2"] {
        cache.r_push(&key, id).await.unwrap();
    }
    let sorted = cache.sort(&key, &SortOptions::default()).await.unwrap();
    assert_eq!(
        sorted,
        vec![Some("1".to_string()), Some("2".to_string()), Some("3".to_string())]
    );
    let top = cache
        .sort(&key, &SortOptions::default().desc().limit(0, 1))
        .await
        .unwrap();
    assert_eq!(top, vec![Some("3".to_string())]);

    // 列表上执行字符串命令
    assert!(matches!(cache.get(&key).await, Err(CacheError::Command(_))));

    cleanup(&cache, &p).await;
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_remove_pattern() {
    let cache = cache();
    let p = prefix("pattern");

    for i in 0..3 {
        cache.set(&format!("{}:{}", p, i), "v").await.unwrap();
    }
    assert_eq!(cache.remove_pattern(&format!("{}:*", p)).await.unwrap(), 3);
    assert_eq!(cache.remove_pattern(&format!("{}:*", p)).await.unwrap(), 0);
    assert_eq!(cache.remove_many(&[]).await.unwrap(), 0);
}
