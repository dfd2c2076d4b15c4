mod helpers;

mod card_test;
mod router_test;
