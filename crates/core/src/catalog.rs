//! The fixed reference dataset seeded into the `firearms` table.
//!
//! Entries are kept exactly as originally catalogued, including their
//! capitalization and the duplicated Kalashnikov Saiga-12 entry (the second
//! copy is dropped by the `(brand, name)` uniqueness constraint on insert).

/// One catalog entry before it is assigned an id by storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFirearm {
    pub brand: &'static str,
    pub name: &'static str,
    pub caliber: &'static str,
    /// Stored in the `type` column.
    pub category: &'static str,
    pub magazine_capacity: i64,
    pub effective_range: i64,
    pub year: i64,
    pub price: i64,
    pub manufacturer: &'static str,
    pub weight: f64,
    pub barrel_length: f64,
    pub action: &'static str,
    pub country_of_origin: &'static str,
}

impl ReferenceFirearm {
    /// `"{brand} {name}"`, used to identify an entry in seed errors and logs.
    pub fn label(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }
}

pub const REFERENCE_FIREARMS: &[ReferenceFirearm] = &[
    ReferenceFirearm {
        brand: "Glock",
        name: "19",
        caliber: "9mm Parabellum",
        category: "Pistol",
        magazine_capacity: 15,
        effective_range: 50,
        year: 1988,
        price: 550,
        manufacturer: "Glock GmbH",
        weight: 0.67,
        barrel_length: 10.2,
        action: "Semi-Auto",
        country_of_origin: "Austria",
    },
    ReferenceFirearm {
        brand: "Glock",
        name: "20",
        caliber: "10mm Auto",
        category: "Pistol",
        magazine_capacity: 15,
        effective_range: 50,
        year: 1991,
        price: 620,
        manufacturer: "Glock GmbH",
        weight: 0.79,
        barrel_length: 11.7,
        action: "Semi-Auto",
        country_of_origin: "Austria",
    },
    ReferenceFirearm {
        brand: "Glock",
        name: "21",
        caliber: ".45 ACP",
        category: "Pistol",
        magazine_capacity: 13,
        effective_range: 50,
        year: 1990,
        price: 600,
        manufacturer: "Glock GmbH",
        weight: 0.83,
        barrel_length: 11.7,
        action: "Semi-Auto",
        country_of_origin: "Austria",
    },
    ReferenceFirearm {
        brand: "H&K",
        name: "MP7",
        caliber: "4.6x30mm",
        category: "Submachine Gun",
        magazine_capacity: 20,
        effective_range: 200,
        year: 2001,
        price: 1700,
        manufacturer: "Heckler & Koch",
        weight: 1.9,
        barrel_length: 18.0,
        action: "Select-Fire",
        country_of_origin: "Germany",
    },
    ReferenceFirearm {
        brand: "H&K",
        name: "MP5",
        caliber: "9mm Parabellum",
        category: "Submachine Gun",
        magazine_capacity: 30,
        effective_range: 200,
        year: 1966,
        price: 2000,
        manufacturer: "Heckler & Koch",
        weight: 2.5,
        barrel_length: 22.5,
        action: "Select-Fire",
        country_of_origin: "Germany",
    },
    ReferenceFirearm {
        brand: "H&K",
        name: "UMP",
        caliber: ".45 ACP",
        category: "Submachine Gun",
        magazine_capacity: 25,
        effective_range: 100,
        year: 1999,
        price: 1800,
        manufacturer: "Heckler & Koch",
        weight: 2.3,
        barrel_length: 20.0,
        action: "Select-Fire",
        country_of_origin: "Germany",
    },
    ReferenceFirearm {
        brand: "H&K",
        name: "G36",
        caliber: "5.56x45mm NATO",
        category: "Rifle",
        magazine_capacity: 30,
        effective_range: 600,
        year: 1997,
        price: 2500,
        manufacturer: "Heckler & Koch",
        weight: 3.6,
        barrel_length: 48.0,
        action: "Select-Fire",
        country_of_origin: "Germany",
    },
    ReferenceFirearm {
        brand: "H&K",
        name: "HK416",
        caliber: "5.56x45mm NATO",
        category: "Rifle",
        magazine_capacity: 30,
        effective_range: 600,
        year: 2004,
        price: 2700,
        manufacturer: "Heckler & Koch",
        weight: 3.4,
        barrel_length: 36.8,
        action: "Select-Fire",
        country_of_origin: "Germany",
    },
    ReferenceFirearm {
        brand: "SIG Sauer",
        name: "P220",
        caliber: ".45 ACP",
        category: "Pistol",
        magazine_capacity: 8,
        effective_range: 50,
        year: 1975,
        price: 700,
        manufacturer: "SIG Sauer",
        weight: 0.86,
        barrel_length: 11.2,
        action: "Semi-Auto",
        country_of_origin: "Switzerland",
    },
    ReferenceFirearm {
        brand: "SIG Sauer",
        name: "P226",
        caliber: "9mm Parabellum",
        category: "Pistol",
        magazine_capacity: 15,
        effective_range: 50,
        year: 1984,
        price: 750,
        manufacturer: "SIG Sauer",
        weight: 0.96,
        barrel_length: 11.2,
        action: "Semi-Auto",
        country_of_origin: "Switzerland",
    },
    ReferenceFirearm {
        brand: "SIG Sauer",
        name: "MPX",
        caliber: "9mm Parabellum",
        category: "Submachine Gun",
        magazine_capacity: 30,
        effective_range: 100,
        year: 2013,
        price: 1900,
        manufacturer: "SIG Sauer",
        weight: 2.7,
        barrel_length: 20.3,
        action: "Select-Fire",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Kriss",
        name: "Vector",
        caliber: ".45 ACP",
        category: "Submachine Gun",
        magazine_capacity: 25,
        effective_range: 100,
        year: 2009,
        price: 2200,
        manufacturer: "Kriss USA",
        weight: 2.7,
        barrel_length: 14.0,
        action: "Select-Fire",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Colt",
        name: "1911",
        caliber: ".45 ACP",
        category: "Pistol",
        magazine_capacity: 7,
        effective_range: 50,
        year: 1911,
        price: 900,
        manufacturer: "Colt Manufacturing",
        weight: 1.1,
        barrel_length: 12.7,
        action: "Semi-Auto",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Colt",
        name: "Anaconda",
        caliber: ".44 Magnum",
        category: "Revolver",
        magazine_capacity: 6,
        effective_range: 100,
        year: 1990,
        price: 1200,
        manufacturer: "Colt Manufacturing",
        weight: 1.5,
        barrel_length: 15.2,
        action: "Double-Action",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Colt",
        name: "Python",
        caliber: ".357 Magnum",
        category: "Revolver",
        magazine_capacity: 6,
        effective_range: 100,
        year: 1955,
        price: 1300,
        manufacturer: "Colt Manufacturing",
        weight: 1.2,
        barrel_length: 10.2,
        action: "Double-Action",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Colt",
        name: "AR-15",
        caliber: "5.56x45mm NATO",
        category: "Rifle",
        magazine_capacity: 30,
        effective_range: 600,
        year: 1964,
        price: 1000,
        manufacturer: "Colt Manufacturing",
        weight: 3.2,
        barrel_length: 50.8,
        action: "Semi-Auto",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "ArmaLite",
        name: "AR-19",
        caliber: "9mm Parabellum",
        category: "Rifle",
        magazine_capacity: 32,
        effective_range: 200,
        year: 2020,
        price: 1500,
        manufacturer: "ArmaLite",
        weight: 3.0,
        barrel_length: 40.6,
        action: "Semi-Auto",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Kalashnikov",
        name: "AK-47",
        caliber: "7.62x39mm",
        category: "Rifle",
        magazine_capacity: 30,
        effective_range: 350,
        year: 1949,
        price: 800,
        manufacturer: "Kalashnikov Concern",
        weight: 4.3,
        barrel_length: 41.5,
        action: "Select-Fire",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "Kalashnikov",
        name: "AKM",
        caliber: "7.62x39mm",
        category: "Rifle",
        magazine_capacity: 30,
        effective_range: 350,
        year: 1959,
        price: 850,
        manufacturer: "Kalashnikov Concern",
        weight: 3.1,
        barrel_length: 41.5,
        action: "Select-Fire",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "Smith & Wesson",
        name: "M&P Shield",
        caliber: "9mm Parabellum",
        category: "Pistol",
        magazine_capacity: 8,
        effective_range: 50,
        year: 2012,
        price: 600,
        manufacturer: "Smith & Wesson",
        weight: 0.58,
        barrel_length: 7.9,
        action: "Semi-Auto",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Smith & Wesson",
        name: "Model 686",
        caliber: ".357 Magnum",
        category: "Revolver",
        magazine_capacity: 6,
        effective_range: 100,
        year: 1980,
        price: 1000,
        manufacturer: "Smith & Wesson",
        weight: 1.3,
        barrel_length: 10.2,
        action: "Double-Action",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Smith & Wesson",
        name: "M&P15",
        caliber: "5.56x45mm NATO",
        category: "Rifle",
        magazine_capacity: 30,
        effective_range: 600,
        year: 2006,
        price: 1200,
        manufacturer: "Smith & Wesson",
        weight: 3.2,
        barrel_length: 40.6,
        action: "Semi-Auto",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Springfield",
        name: "Enhanced 1911",
        caliber: ".45 ACP",
        category: "Pistol",
        magazine_capacity: 7,
        effective_range: 50,
        year: 1985,
        price: 1100,
        manufacturer: "Springfield Armory",
        weight: 1.1,
        barrel_length: 12.7,
        action: "Semi-Auto",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Springfield",
        name: "M1A",
        caliber: "7.62x51mm NATO",
        category: "Rifle",
        magazine_capacity: 20,
        effective_range: 800,
        year: 1974,
        price: 1800,
        manufacturer: "Springfield Armory",
        weight: 4.2,
        barrel_length: 55.9,
        action: "Semi-Auto",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Springfield",
        name: "XD-M",
        caliber: "9mm Parabellum",
        category: "Pistol",
        magazine_capacity: 19,
        effective_range: 50,
        year: 2008,
        price: 700,
        manufacturer: "Springfield Armory",
        weight: 0.88,
        barrel_length: 11.7,
        action: "Semi-Auto",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Beretta",
        name: "92FS",
        caliber: "9mm Parabellum",
        category: "Pistol",
        magazine_capacity: 15,
        effective_range: 50,
        year: 1976,
        price: 800,
        manufacturer: "Beretta",
        weight: 0.95,
        barrel_length: 12.5,
        action: "Semi-Auto",
        country_of_origin: "Italy",
    },
    ReferenceFirearm {
        brand: "Beretta",
        name: "M9A4",
        caliber: "9mm Parabellum",
        category: "Pistol",
        magazine_capacity: 17,
        effective_range: 50,
        year: 2021,
        price: 900,
        manufacturer: "Beretta",
        weight: 0.94,
        barrel_length: 12.5,
        action: "Semi-Auto",
        country_of_origin: "Italy",
    },
    ReferenceFirearm {
        brand: "Beretta",
        name: "APX",
        caliber: "9mm Parabellum",
        category: "Pistol",
        magazine_capacity: 17,
        effective_range: 50,
        year: 2017,
        price: 650,
        manufacturer: "Beretta",
        weight: 0.80,
        barrel_length: 10.8,
        action: "Semi-Auto",
        country_of_origin: "Italy",
    },
    ReferenceFirearm {
        brand: "Benelli",
        name: "M4",
        caliber: "12 Gauge",
        category: "Shotgun",
        magazine_capacity: 7,
        effective_range: 50,
        year: 1998,
        price: 1600,
        manufacturer: "Benelli Armi",
        weight: 3.8,
        barrel_length: 47.0,
        action: "Semi-Auto",
        country_of_origin: "Italy",
    },
    ReferenceFirearm {
        brand: "Benelli",
        name: "Super Black Eagle 3",
        caliber: "12 Gauge",
        category: "Shotgun",
        magazine_capacity: 4,
        effective_range: 50,
        year: 2017,
        price: 2000,
        manufacturer: "Benelli Armi",
        weight: 3.3,
        barrel_length: 71.1,
        action: "Semi-Auto",
        country_of_origin: "Italy",
    },
    ReferenceFirearm {
        brand: "Benelli",
        name: "Nova",
        caliber: "12 Gauge",
        category: "Shotgun",
        magazine_capacity: 4,
        effective_range: 50,
        year: 1999,
        price: 900,
        manufacturer: "Benelli Armi",
        weight: 3.6,
        barrel_length: 66.0,
        action: "Pump-Action",
        country_of_origin: "Italy",
    },
    ReferenceFirearm {
        brand: "KBP",
        name: "PP-2000",
        caliber: "9mm Parabellum",
        category: "Submachine Gun",
        magazine_capacity: 20,
        effective_range: 100,
        year: 2006,
        price: 1400,
        manufacturer: "KBP Instrument Design Bureau",
        weight: 1.4,
        barrel_length: 18.2,
        action: "Select-Fire",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "Izhmash",
        name: "PP-19 Bizon",
        caliber: "9x18mm Makarov",
        category: "Submachine Gun",
        magazine_capacity: 64,
        effective_range: 100,
        year: 1996,
        price: 1500,
        manufacturer: "Izhmash",
        weight: 2.1,
        barrel_length: 22.5,
        action: "Select-Fire",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "Nagant",
        name: "M1895",
        caliber: "7.62x38mmR",
        category: "Revolver",
        magazine_capacity: 7,
        effective_range: 50,
        year: 1895,
        price: 500,
        manufacturer: "Tula Arsenal",
        weight: 0.8,
        barrel_length: 11.4,
        action: "Double-Action",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "Izhmash",
        name: "PP-19-01 Vityaz-SN",
        caliber: "9mm Parabellum",
        category: "Submachine Gun",
        magazine_capacity: 30,
        effective_range: 200,
        year: 2004,
        price: 1600,
        manufacturer: "Izhmash",
        weight: 2.9,
        barrel_length: 23.7,
        action: "Select-Fire",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "Kalashnikov",
        name: "PPK-20",
        caliber: "9mm Parabellum",
        category: "Submachine Gun",
        magazine_capacity: 30,
        effective_range: 200,
        year: 2020,
        price: 1800,
        manufacturer: "Kalashnikov Concern",
        weight: 2.7,
        barrel_length: 23.7,
        action: "Select-Fire",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "Kalashnikov",
        name: "Saiga-9",
        caliber: "9mm Parabellum",
        category: "Carbine",
        magazine_capacity: 10,
        effective_range: 200,
        year: 2010,
        price: 1200,
        manufacturer: "Kalashnikov Concern",
        weight: 3.2,
        barrel_length: 34.5,
        action: "Semi-Auto",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "Yarygin",
        name: "MP-443 Grach",
        caliber: "9mm Parabellum",
        category: "Pistol",
        magazine_capacity: 17,
        effective_range: 50,
        year: 2003,
        price: 600,
        manufacturer: "Izhevsk Mechanical Plant",
        weight: 0.95,
        barrel_length: 11.2,
        action: "Semi-Auto",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "Izhmash",
        name: "Makarov PM",
        caliber: "9x18mm Makarov",
        category: "Pistol",
        magazine_capacity: 8,
        effective_range: 50,
        year: 1951,
        price: 400,
        manufacturer: "Izhmash",
        weight: 0.73,
        barrel_length: 9.3,
        action: "Semi-Auto",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "Izhmash",
        name: "PSM",
        caliber: "5.45x18mm",
        category: "Pistol",
        magazine_capacity: 8,
        effective_range: 50,
        year: 1973,
        price: 450,
        manufacturer: "Izhmash",
        weight: 0.46,
        barrel_length: 8.5,
        action: "Semi-Auto",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "FN",
        name: "Five-seveN",
        caliber: "5.7x28mm",
        category: "Pistol",
        magazine_capacity: 20,
        effective_range: 50,
        year: 2000,
        price: 1100,
        manufacturer: "FN Herstal",
        weight: 0.62,
        barrel_length: 12.2,
        action: "Semi-Auto",
        country_of_origin: "Belgium",
    },
    ReferenceFirearm {
        brand: "FN",
        name: "SCAR-L",
        caliber: "5.56x45mm NATO",
        category: "Rifle",
        magazine_capacity: 30,
        effective_range: 600,
        year: 2009,
        price: 2500,
        manufacturer: "FN Herstal",
        weight: 3.3,
        barrel_length: 35.1,
        action: "Select-Fire",
        country_of_origin: "Belgium",
    },
    ReferenceFirearm {
        brand: "FN",
        name: "P90",
        caliber: "5.7x28mm",
        category: "Submachine Gun",
        magazine_capacity: 50,
        effective_range: 200,
        year: 1990,
        price: 2000,
        manufacturer: "FN Herstal",
        weight: 2.6,
        barrel_length: 26.3,
        action: "Select-Fire",
        country_of_origin: "Belgium",
    },
    ReferenceFirearm {
        brand: "FN",
        name: "FAL",
        caliber: "7.62x51mm NATO",
        category: "Rifle",
        magazine_capacity: 20,
        effective_range: 800,
        year: 1953,
        price: 1500,
        manufacturer: "FN Herstal",
        weight: 4.3,
        barrel_length: 53.3,
        action: "Select-Fire",
        country_of_origin: "Belgium",
    },
    ReferenceFirearm {
        brand: "Kalashnikov",
        name: "Saiga-12",
        caliber: "12 Gauge",
        category: "Shotgun",
        magazine_capacity: 8,
        effective_range: 50,
        year: 1997,
        price: 1000,
        manufacturer: "Kalashnikov Concern",
        weight: 3.6,
        barrel_length: 43.0,
        action: "Semi-Auto",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "Kalashnikov",
        name: "Saiga-410",
        caliber: ".410 Bore",
        category: "Shotgun",
        magazine_capacity: 8,
        effective_range: 50,
        year: 1997,
        price: 900,
        manufacturer: "Kalashnikov Concern",
        weight: 3.4,
        barrel_length: 43.0,
        action: "Semi-Auto",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "Kalashnikov",
        name: "Saiga-20",
        caliber: "20 Gauge",
        category: "Shotgun",
        magazine_capacity: 8,
        effective_range: 50,
        year: 1997,
        price: 950,
        manufacturer: "Kalashnikov Concern",
        weight: 3.5,
        barrel_length: 43.0,
        action: "Semi-Auto",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "Molot",
        name: "Vepr-12",
        caliber: "12 Gauge",
        category: "Shotgun",
        magazine_capacity: 8,
        effective_range: 50,
        year: 2003,
        price: 1100,
        manufacturer: "Molot-Oruzhie",
        weight: 3.9,
        barrel_length: 43.0,
        action: "Semi-Auto",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "Kalashnikov",
        name: "Saiga-12",
        caliber: "12 Gauge",
        category: "Shotgun",
        magazine_capacity: 8,
        effective_range: 50,
        year: 1997,
        price: 1000,
        manufacturer: "Kalashnikov Concern",
        weight: 3.6,
        barrel_length: 43.0,
        action: "Semi-Auto",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "Degtyarev",
        name: "RPG-7",
        caliber: "40mm Rocket",
        category: "Rocket Launcher",
        magazine_capacity: 1,
        effective_range: 300,
        year: 1961,
        price: 2500,
        manufacturer: "Bazalt",
        weight: 7.0,
        barrel_length: 95.0,
        action: "Single-Shot",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "Raytheon",
        name: "FGM-148 Javelin",
        caliber: "127mm Missile",
        category: "Missile Launcher",
        magazine_capacity: 1,
        effective_range: 2500,
        year: 1996,
        price: 25000,
        manufacturer: "Raytheon/Lockheed Martin",
        weight: 22.3,
        barrel_length: 110.0,
        action: "Single-Shot",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Lockheed Martin",
        name: "Predator SRAW",
        caliber: "140mm Missile",
        category: "Missile Launcher",
        magazine_capacity: 1,
        effective_range: 600,
        year: 2002,
        price: 15000,
        manufacturer: "Lockheed Martin",
        weight: 9.8,
        barrel_length: 100.0,
        action: "Single-Shot",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Saab",
        name: "AT4",
        caliber: "84mm Rocket",
        category: "Rocket Launcher",
        magazine_capacity: 1,
        effective_range: 300,
        year: 1987,
        price: 2000,
        manufacturer: "Saab Bofors Dynamics",
        weight: 6.7,
        barrel_length: 100.0,
        action: "Single-Shot",
        country_of_origin: "Sweden",
    },
    ReferenceFirearm {
        brand: "Colt",
        name: "M4 Carbine",
        caliber: "5.56x45mm NATO",
        category: "Rifle",
        magazine_capacity: 30,
        effective_range: 500,
        year: 1994,
        price: 2000,
        manufacturer: "Colt Manufacturing",
        weight: 2.9,
        barrel_length: 36.8,
        action: "Select-Fire",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Tula",
        name: "PPSh-41",
        caliber: "7.62x25mm Tokarev",
        category: "Submachine Gun",
        magazine_capacity: 71,
        effective_range: 200,
        year: 1941,
        price: 600,
        manufacturer: "Tula Arsenal",
        weight: 3.6,
        barrel_length: 26.9,
        action: "Select-Fire",
        country_of_origin: "Russia",
    },
    ReferenceFirearm {
        brand: "Erma",
        name: "MP40",
        caliber: "9mm Parabellum",
        category: "Submachine Gun",
        magazine_capacity: 32,
        effective_range: 100,
        year: 1940,
        price: 700,
        manufacturer: "Erma Werke",
        weight: 4.0,
        barrel_length: 25.1,
        action: "Select-Fire",
        country_of_origin: "Germany",
    },
    ReferenceFirearm {
        brand: "Mauser",
        name: "MG42",
        caliber: "7.92x57mm Mauser",
        category: "Machine Gun",
        magazine_capacity: 250,
        effective_range: 1000,
        year: 1942,
        price: 3000,
        manufacturer: "Mauser Werke",
        weight: 11.6,
        barrel_length: 53.0,
        action: "Full-Auto",
        country_of_origin: "Germany",
    },
    ReferenceFirearm {
        brand: "Browning",
        name: "M1919",
        caliber: "7.62x51mm NATO",
        category: "Machine Gun",
        magazine_capacity: 250,
        effective_range: 1000,
        year: 1919,
        price: 2500,
        manufacturer: "Browning Arms",
        weight: 14.0,
        barrel_length: 61.0,
        action: "Full-Auto",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "General Electric",
        name: "M134D Minigun",
        caliber: "7.62x51mm NATO",
        category: "Rotary Machine Gun",
        magazine_capacity: 4000,
        effective_range: 1000,
        year: 1960,
        price: 50000,
        manufacturer: "General Electric",
        weight: 38.0,
        barrel_length: 55.9,
        action: "Full-Auto",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Ruger",
        name: "10/22",
        caliber: ".22 LR",
        category: "Rifle",
        magazine_capacity: 10,
        effective_range: 100,
        year: 1964,
        price: 300,
        manufacturer: "Sturm, Ruger & Co.",
        weight: 2.3,
        barrel_length: 47.0,
        action: "Semi-Auto",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Ruger",
        name: "Mini-14",
        caliber: "5.56x45mm NATO",
        category: "Rifle",
        magazine_capacity: 20,
        effective_range: 400,
        year: 1973,
        price: 900,
        manufacturer: "Sturm, Ruger & Co.",
        weight: 2.9,
        barrel_length: 47.0,
        action: "Semi-Auto",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Remington",
        name: "870",
        caliber: "12 Gauge",
        category: "Shotgun",
        magazine_capacity: 7,
        effective_range: 50,
        year: 1950,
        price: 500,
        manufacturer: "Remington Arms",
        weight: 3.6,
        barrel_length: 71.1,
        action: "Pump-Action",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Remington",
        name: "700",
        caliber: ".308 Winchester",
        category: "Rifle",
        magazine_capacity: 4,
        effective_range: 800,
        year: 1962,
        price: 800,
        manufacturer: "Remington Arms",
        weight: 3.4,
        barrel_length: 61.0,
        action: "Bolt-Action",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Winchester",
        name: "Model 70",
        caliber: ".30-06 Springfield",
        category: "RifleΙ",
        magazine_capacity: 5,
        effective_range: 800,
        year: 1936,
        price: 1000,
        manufacturer: "Winchester Repeating Arms",
        weight: 3.6,
        barrel_length: 61.0,
        action: "Bolt-Action",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "CZ",
        name: "CZ 75",
        caliber: "9mm Parabellum",
        category: "Pistol",
        magazine_capacity: 16,
        effective_range: 50,
        year: 1975,
        price: 700,
        manufacturer: "Česká zbrojovka",
        weight: 1.0,
        barrel_length: 12.0,
        action: "Semi-Auto",
        country_of_origin: "Czech Republic",
    },
    ReferenceFirearm {
        brand: "IWI",
        name: "Tavor X95",
        caliber: "5.56x45mm NATO",
        category: "Rifle",
        magazine_capacity: 30,
        effective_range: 500,
        year: 2009,
        price: 2200,
        manufacturer: "Israel Weapon Industries",
        weight: 3.3,
        barrel_length: 33.0,
        action: "Select-Fire",
        country_of_origin: "Israel",
    },
    ReferenceFirearm {
        brand: "Steyr",
        name: "AUG",
        caliber: "5.56x45mm NATO",
        category: "Rifle",
        magazine_capacity: 30,
        effective_range: 600,
        year: 1977,
        price: 2100,
        manufacturer: "Steyr Mannlicher",
        weight: 3.6,
        barrel_length: 50.8,
        action: "Select-Fire",
        country_of_origin: "Austria",
    },
    ReferenceFirearm {
        brand: "Mossberg",
        name: "500",
        caliber: "12 Gauge",
        category: "Shotgun",
        magazine_capacity: 6,
        effective_range: 50,
        year: 1960,
        price: 450,
        manufacturer: "O.F. Mossberg & Sons",
        weight: 3.4,
        barrel_length: 71.1,
        action: "Pump-Action",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Magnum Research",
        name: "Desert Eagle",
        caliber: ".50 AE",
        category: "Pistol",
        magazine_capacity: 7,
        effective_range: 50,
        year: 1983,
        price: 1500,
        manufacturer: "Magnum Research",
        weight: 2.0,
        barrel_length: 15.2,
        action: "Semi-Auto",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "Beretta",
        name: "93R",
        caliber: "9mm Parabellum",
        category: "Pistol",
        magazine_capacity: 20,
        effective_range: 50,
        year: 1979,
        price: 1200,
        manufacturer: "Beretta",
        weight: 1.2,
        barrel_length: 12.5,
        action: "Select-Fire",
        country_of_origin: "Italy",
    },
    ReferenceFirearm {
        brand: "H&K",
        name: "USP",
        caliber: "9mm Parabellum",
        category: "Pistol",
        magazine_capacity: 15,
        effective_range: 50,
        year: 1993,
        price: 800,
        manufacturer: "Heckler & Koch",
        weight: 0.79,
        barrel_length: 10.8,
        action: "Semi-Auto",
        country_of_origin: "Germany",
    },
    ReferenceFirearm {
        brand: "SIG Sauer",
        name: "P250",
        caliber: "9mm Parabellum",
        category: "Pistol",
        magazine_capacity: 17,
        effective_range: 50,
        year: 2007,
        price: 650,
        manufacturer: "SIG Sauer",
        weight: 0.82,
        barrel_length: 10.8,
        action: "Semi-Auto",
        country_of_origin: "United States",
    },
    ReferenceFirearm {
        brand: "GIAT",
        name: "FAMAS",
        caliber: "5.56x45mm NATO",
        category: "Rifle",
        magazine_capacity: 25,
        effective_range: 450,
        year: 1978,
        price: 2200,
        manufacturer: "Nexter Systems",
        weight: 3.6,
        barrel_length: 48.8,
        action: "Select-Fire",
        country_of_origin: "France",
    },
    ReferenceFirearm {
        brand: "Accuracy International",
        name: "AWP",
        caliber: "7.62x51mm NATO",
        category: "Sniper Rifle",
        magazine_capacity: 10,
        effective_range: 800,
        year: 1997,
        price: 3000,
        manufacturer: "Accuracy International",
        weight: 6.5,
        barrel_length: 61.0,
        action: "Bolt-Action",
        country_of_origin: "United Kingdom",
    },
    ReferenceFirearm {
        brand: "SIG Sauer",
        name: "SG553",
        caliber: "5.56x45mm NATO",
        category: "Rifle",
        magazine_capacity: 30,
        effective_range: 400,
        year: 2009,
        price: 2300,
        manufacturer: "Swiss Arms",
        weight: 3.2,
        barrel_length: 34.7,
        action: "Select-Fire",
        country_of_origin: "Switzerland",
    },
];
