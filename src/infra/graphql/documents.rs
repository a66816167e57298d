pub const FILTER_TYPES: &str = r#"
query FilterTypes($tcg: String_comparison_exp!) {
  type: card_details(distinct_on: type, where: { tcg: $tcg, type: { _is_null: false } }) { type }
  subtype: card_details(distinct_on: subtype, where: { tcg: $tcg, subtype: { _is_null: false } }) { subtype }
  kind: card_details(distinct_on: kind, where: { tcg: $tcg, kind: { _is_null: false } }) { kind }
  cost: card_details(distinct_on: cost, where: { tcg: $tcg, cost: { _is_null: false } }) { cost }
  attack: card_details(distinct_on: attack, where: { tcg: $tcg, attack: { _is_null: false } }) { attack }
  defence: card_details(distinct_on: defence, where: { tcg: $tcg, defence: { _is_null: false } }) { defence }
  set: card_details(distinct_on: set, where: { tcg: $tcg, set: { _is_null: false } }) { set }
  rarity: card_details(distinct_on: rarity, where: { tcg: $tcg, rarity: { _is_null: false } }) { rarity }
}
"#;

pub const PAGINATION_COUNT: &str = r#"
query PaginationCount($where: card_details_bool_exp = {}) {
  card_details_aggregate(where: $where) {
    aggregate {
      count
    }
  }
}
"#;

pub const CARD_LIST: &str = r#"
query CardList(
  $where: card_details_bool_exp
  $order_by: [card_details_order_by!]
  $limit: Int
  $offset: Int
) {
  card_details(where: $where, order_by: $order_by, limit: $limit, offset: $offset) {
    id
    name
    price
    set
    image
  }
}
"#;

pub const CARD_LIST_SUBSCRIPTION: &str = r#"
subscription CardListLive(
  $where: card_details_bool_exp
  $order_by: [card_details_order_by!]
  $limit: Int
  $offset: Int
) {
  card_details(where: $where, order_by: $order_by, limit: $limit, offset: $offset) {
    id
    name
    price
    set
    image
  }
}
"#;

pub const CARD_BY_ID: &str = r#"
query CardById($id: uuid!, $similar_limit: Int!) {
  card_generic_by_pk(id: $id) {
    id
    name
    price
    price_foil
    price_other
    card_img: image
    type
    subtype
    set
    rarity
    card_id
    set_code
    cost
    cost_text
    attack
    defence
    flavor_text
    kind
    text: game_text
  }
  similar_cards: lotr_all_cards_pricing(limit: $similar_limit) {
    id
    card_name
    card_price
    price_foil
    price_tng
    card_img
  }
}
"#;
