// src/main.rs
use js_sys::Date;
use wasm_bindgen::JsValue;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Service {
    Flight,
    Hotel,
    Bus,
    Cab,
}

impl Service {
    fn label(self) -> &'static str {
        match self {
            Service::Flight => "Flights",
            Service::Hotel => "Hotels",
            Service::Bus => "Buses",
            Service::Cab => "Cabs",
        }
    }

    // data-service attribute carried by each icon in the strip
    fn tag(self) -> &'static str {
        match self {
            Service::Flight => "flight",
            Service::Hotel => "hotel",
            Service::Bus => "bus",
            Service::Cab => "cab",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Service::Flight => "✈",
            Service::Hotel => "🏨",
            Service::Bus => "🚌",
            Service::Cab => "🚕",
        }
    }

    fn all() -> [Service; 4] {
        [Service::Flight, Service::Hotel, Service::Bus, Service::Cab]
    }
}

impl Default for Service {
    fn default() -> Self {
        Service::Flight
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum TripType {
    OneWay,
    RoundTrip,
    MultiCity,
}

impl TripType {
    fn label(self) -> &'static str {
        match self {
            TripType::OneWay => "One Way",
            TripType::RoundTrip => "Round Trip",
            TripType::MultiCity => "Multi City",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            TripType::OneWay => "oneway",
            TripType::RoundTrip => "roundtrip",
            TripType::MultiCity => "multicity",
        }
    }

    fn all() -> [TripType; 3] {
        [TripType::OneWay, TripType::RoundTrip, TripType::MultiCity]
    }
}

impl Default for TripType {
    fn default() -> Self {
        TripType::OneWay
    }
}

struct FareCard {
    title: &'static str,
    blurb: &'static str,
}

const FARE_CARDS: [FareCard; 5] = [
    FareCard { title: "Regular", blurb: "Regular fares" },
    FareCard { title: "Student", blurb: "Extra discount/baggage" },
    FareCard { title: "Senior Citizen", blurb: "Upto Rs 600 off" },
    FareCard { title: "Doctor & Nurses", blurb: "Upto Rs 600 off" },
    FareCard { title: "Armed Forces", blurb: "Upto Rs 600 off" },
];

const TRAVELLER_CLASS: [&str; 4] = [
    "1 Traveller, Economy",
    "2 Travellers, Economy",
    "1 Traveller, Business",
    "2 Travellers, Business",
];

// (option value, visible label)
const PRICE_BANDS: [(&str, &str); 4] = [
    ("0-1500", "Rs upto 1500"),
    ("1500-2500", "Rs 1500 - 2500"),
    ("2500-5000", "Rs 2500 - 5000"),
    ("5000-plus", "Rs 5000+"),
];

const CAB_SEGMENTS: [&str; 4] = [
    "Outstation One-Way",
    "Outstation Round-Trip",
    "Airport Transfer",
    "Hourly Rentals",
];

const MS_PER_DAY: f64 = 86_400_000.0;

fn format_ymd(y: u32, m: u32, d: u32) -> String {
    format!("{y:04}-{m:02}-{d:02}")
}

// JS day indices: 0 = Sunday
fn weekday_name(day: u32) -> &'static str {
    match day {
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "Sunday",
    }
}

fn ymd_of(date: &Date) -> String {
    // JS months are 0-11
    format_ymd(date.get_full_year(), date.get_month() + 1, date.get_date())
}

fn day_after(date: &Date) -> Date {
    Date::new(&JsValue::from_f64(date.get_time() + MS_PER_DAY))
}

fn block_submit() -> Callback<SubmitEvent> {
    // Inert forms: nothing is collected or sent anywhere
    Callback::from(|e: SubmitEvent| e.prevent_default())
}

#[function_component(NavBar)]
fn nav_bar() -> Html {
    html! {
      <div class="nav-bar">
        <div class="web-logo">{ "trip" }<em>{ "deck" }</em></div>

        <div class="register-account">
          <div class="nav-entry">
            <span class="nav-icon">{ "🧑‍💼" }</span>
            <div class="nav-info">
              <h4>{ "Register business" }</h4>
              <p>{ "Grow your business" }</p>
            </div>
          </div>

          <div class="nav-entry">
            <span class="nav-icon">{ "🧳" }</span>
            <div class="nav-info">
              <h4>{ "My Trips" }</h4>
              <p>{ "Manage your bookings" }</p>
            </div>
          </div>

          <div class="nav-entry">
            <span class="nav-icon">{ "👤" }</span>
            <div class="nav-info">
              <h4>{ "Login or Create Account" }</h4>
            </div>
          </div>

          <div class="lang-currency">
            <span class="nav-icon">{ "🇮🇳" }</span>
            <span>{ "INR" }</span>{ " | " }<span>{ "English" }</span>
          </div>
        </div>
      </div>
    }
}

#[function_component(FlightSearch)]
fn flight_search() -> Html {
    let trip = use_state(TripType::default);

    let pick_trip = {
        let trip = trip.clone();
        Callback::from(move |t: TripType| trip.set(t))
    };

    html! {
      <div class="flight-search">
        <form class="flight-search-form" onsubmit={block_submit()}>
          <div class="segment-type">
            { for TripType::all().into_iter().map(|t| {
                let active = *trip == t;
                let cls = if active { "segment-option active" } else { "segment-option" };
                let pick_trip = pick_trip.clone();
                html! {
                  <div
                    class={cls}
                    data-trip={t.tag()}
                    onclick={Callback::from(move |_| pick_trip.emit(t))}
                  >
                    <input class="checkbox-input" type="radio" name="tripType" checked={active} />
                    <span class="segment-title">{ t.label() }</span>
                  </div>
                }
            }) }
          </div>

          <div class="from-to-row">
            <div class="form-field">
              <label>{ "From" }</label>
              <input class="field-from" type="text" placeholder="Enter origin city or airport" />
            </div>
            <span class="exchange-icon">{ "⇄" }</span>
            <div class="form-field">
              <label>{ "To" }</label>
              <input class="field-to" type="text" placeholder="Enter destination city or airport" />
            </div>

            <div class="form-field">
              <label>{ "Departure" }</label>
              <input type="date" />
            </div>

            <div class="form-field">
              <label>{ "Return" }</label>
              <input type="date" />
            </div>

            <div class="form-field">
              <label>{ "Travellers & Class" }</label>
              <select>
                { for TRAVELLER_CLASS.iter().map(|o| html! { <option>{ *o }</option> }) }
              </select>
            </div>
          </div>

          <div class="extra-savings">
            <h1>{ "Extra Savings" }</h1>
            <div class="discount-options">
              { for FARE_CARDS.iter().map(|card| html! {
                  <div class="discount-card">
                    <input type="radio" name="fareType" />
                    <div>
                      <h4>{ card.title }</h4>
                      <p>{ card.blurb }</p>
                    </div>
                  </div>
              }) }
            </div>

            <div class="flight-tracker">
              <span class="tracker-icon">{ "📍" }</span>
              <span>{ " Flight Tracker" }</span>
            </div>
          </div>

          <div class="form-field search-btn-field">
            <button type="submit">{ "Search" }</button>
          </div>
        </form>
      </div>
    }
}

#[function_component(HotelSearch)]
fn hotel_search() -> Html {
    let check_in = Date::new_0();
    let check_out = day_after(&check_in);

    html! {
      <div class="hotel-search">
        <form class="hotel-search-form" onsubmit={block_submit()}>
          <div class="select-segment">
            <div class="segment">
              <input type="radio" name="hotelDeal" />
              <span>{ "Upto 4 Rooms" }</span>
            </div>
            <div class="segment">
              <input type="radio" name="hotelDeal" />
              <span>{ "Group Deals" }</span>
            </div>
          </div>

          <div class="hotel-criteria">
            <div class="input-box">
              <span>{ "City, Property Name or Location" }</span>
              <input type="text" />
              <span class="hint">{ "City" }</span>
            </div>

            <div class="input-box">
              <span>{ "Check-In" }</span>
              <input type="date" value={ymd_of(&check_in)} />
              <span class="hint">{ weekday_name(check_in.get_day()) }</span>
            </div>

            <div class="input-box">
              <span>{ "Check-Out" }</span>
              <input type="date" value={ymd_of(&check_out)} />
              <span class="hint">{ weekday_name(check_out.get_day()) }</span>
            </div>

            <div class="input-box">
              <span>{ "Rooms & Guests" }</span>
              <input type="text" />
            </div>

            <div class="input-box">
              <span>{ "Price per night" }</span>
              <select>
                { for PRICE_BANDS.iter().map(|(value, label)| html! {
                    <option value={*value}>{ *label }</option>
                }) }
              </select>
            </div>
          </div>

          <div class="search-btn-field">
            <button type="submit">{ "Search" }</button>
          </div>
        </form>
      </div>
    }
}

#[function_component(BusSearch)]
fn bus_search() -> Html {
    let travel = Date::new_0();

    html! {
      <div class="bus-search">
        <form class="bus-search-form" onsubmit={block_submit()}>
          <div class="bus-ticket-row">
            <div class="input-box">
              <span>{ "From" }</span>
              <input type="text" placeholder="Bhopal, Madhya Pradesh" />
              <span class="hint">{ "India" }</span>
            </div>

            <div class="input-box">
              <span>{ "To" }</span>
              <input type="text" placeholder="Delhi, Delhi" />
              <span class="hint">{ "India" }</span>
            </div>

            <div class="input-box">
              <span>{ "Travel Date" }</span>
              <input type="date" value={ymd_of(&travel)} />
              <span class="hint">{ weekday_name(travel.get_day()) }</span>
            </div>
          </div>

          <div class="search-btn-field">
            <button type="submit">{ "SEARCH" }</button>
          </div>
        </form>
      </div>
    }
}

#[function_component(CabSearch)]
fn cab_search() -> Html {
    let departure = Date::new_0();

    html! {
      <div class="cab-search">
        <form class="cab-search-form" onsubmit={block_submit()}>
          <div class="cab-segment">
            { for CAB_SEGMENTS.iter().map(|label| html! {
                <div class="segment">
                  <input type="radio" name="cabTripKind" />
                  <span>{ *label }</span>
                </div>
            }) }
          </div>

          <div class="cab-criteria">
            <div class="from-to">
              <div class="input-box">
                <span>{ "From" }</span>
                <input type="text" />
              </div>
              <span class="exchange-icon">{ "⇄" }</span>
              <div class="input-box">
                <span>{ "To" }</span>
                <input type="text" />
              </div>
            </div>

            <div class="input-box">
              <span>{ "Departure" }</span>
              <input type="date" />
              <span class="hint">{ weekday_name(departure.get_day()) }</span>
            </div>

            <div class="input-box">
              <span>{ "Return" }</span>
              <input type="date" />
              <span class="hint">{ weekday_name(departure.get_day()) }</span>
            </div>

            <div class="input-box">
              <span>{ "Pickup-Time" }</span>
              <input type="time" />
            </div>
          </div>

          <div class="cab-stops">{ "+ Add Stops" }</div>

          <div class="search-btn-field">
            <button type="submit">{ "Search" }</button>
          </div>
        </form>
      </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let service = use_state(Service::default);

    let select_service = {
        let service = service.clone();
        Callback::from(move |s: Service| {
            web_sys::console::log_1(&format!("search type: {}", s.tag()).into());
            service.set(s);
        })
    };

    let panel = match *service {
        Service::Flight => html! { <FlightSearch /> },
        Service::Hotel => html! { <HotelSearch /> },
        Service::Bus => html! { <BusSearch /> },
        Service::Cab => html! { <CabSearch /> },
    };

    html! {
      <div class="landing">
        <NavBar />

        <div class="search-options" role="tablist" aria-label="Search type">
          { for Service::all().into_iter().map(|s| {
              let is_active = *service == s;
              let cls = if is_active { "search-option active" } else { "search-option" };
              let select_service = select_service.clone();
              html! {
                <button
                  class={cls}
                  type="button"
                  role="tab"
                  data-service={s.tag()}
                  aria-selected={is_active.to_string()}
                  onclick={Callback::from(move |_| select_service.emit(s))}
                >
                  <span class="search-icon">{ s.glyph() }</span>
                  <span class="search-label">{ s.label() }</span>
                </button>
              }
          }) }
        </div>

        { panel }
      </div>
    }
}

fn main() {
    let root = web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id("app")
        .unwrap();
    yew::Renderer::<App>::with_root(root).render();
}


#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_app() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<App>::with_root(root.clone()).render();
        root
    }

    // One macrotask is enough for the scheduler to flush a pending render
    async fn settle() {
        TimeoutFuture::new(25).await;
    }

    fn click(root: &Element, selector: &str) {
        root.query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("no element matches {selector}"))
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    fn visible_panels(root: &Element) -> Vec<&'static str> {
        ["flight-search", "hotel-search", "bus-search", "cab-search"]
            .into_iter()
            .filter(|cls| root.query_selector(&format!(".{cls}")).unwrap().is_some())
            .collect()
    }

    #[wasm_bindgen_test]
    async fn initial_render_shows_flight_panel_only() {
        let root = mount_app();
        settle().await;
        assert_eq!(visible_panels(&root), vec!["flight-search"]);
    }

    #[wasm_bindgen_test]
    async fn each_icon_shows_its_own_panel() {
        let root = mount_app();
        settle().await;
        let cases = [
            ("hotel", "hotel-search"),
            ("bus", "bus-search"),
            ("cab", "cab-search"),
            ("flight", "flight-search"),
        ];
        for (tag, cls) in cases {
            click(&root, &format!("[data-service='{tag}']"));
            settle().await;
            assert_eq!(visible_panels(&root), vec![cls], "after clicking {tag}");
        }
    }

    #[wasm_bindgen_test]
    async fn reselecting_the_active_service_keeps_its_panel() {
        let root = mount_app();
        settle().await;
        click(&root, "[data-service='hotel']");
        settle().await;
        click(&root, "[data-service='hotel']");
        settle().await;
        assert_eq!(visible_panels(&root), vec!["hotel-search"]);
    }

    #[wasm_bindgen_test]
    async fn clicking_the_strip_background_changes_nothing() {
        let root = mount_app();
        settle().await;
        click(&root, ".search-options");
        settle().await;
        assert_eq!(visible_panels(&root), vec!["flight-search"]);
    }

    #[wasm_bindgen_test]
    async fn hotel_twice_then_cab_scenario() {
        let root = mount_app();
        settle().await;
        assert_eq!(visible_panels(&root), vec!["flight-search"]);

        click(&root, "[data-service='hotel']");
        settle().await;
        assert_eq!(visible_panels(&root), vec!["hotel-search"]);

        click(&root, "[data-service='hotel']");
        settle().await;
        assert_eq!(visible_panels(&root), vec!["hotel-search"]);

        click(&root, "[data-service='cab']");
        settle().await;
        assert_eq!(visible_panels(&root), vec!["cab-search"]);
    }

    #[wasm_bindgen_test]
    async fn trip_type_highlight_moves_without_touching_service() {
        let root = mount_app();
        settle().await;

        let active = root.query_selector(".segment-option.active").unwrap().unwrap();
        assert_eq!(active.get_attribute("data-trip").as_deref(), Some("oneway"));

        click(&root, "[data-trip='roundtrip']");
        settle().await;

        let active = root.query_selector(".segment-option.active").unwrap().unwrap();
        assert_eq!(active.get_attribute("data-trip").as_deref(), Some("roundtrip"));
        assert!(root
            .query_selector("[data-trip='oneway'].active")
            .unwrap()
            .is_none());
        assert_eq!(visible_panels(&root), vec!["flight-search"]);
    }
}
