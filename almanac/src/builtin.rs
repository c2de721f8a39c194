//! The built-in constant table
//!
//! Unit variants of the same quantity are adjacent and carry an identical
//! name list; the catalog turns that adjacency into quantity-group ids at
//! construction. Sources name the dataset each value was taken from.

use std::f64::consts::PI;

use crate::entry::{ConstantEntry, UnitSystem};

const PDG_TABLES: &str = "https://pdg.lbl.gov/2021/tables/contents_tables.html on 10/27/21";
const PDG_REVIEWS: &str = "PDG 2021 (https://pdg.lbl.gov/2021/reviews/contents_sports.html)";
const NASA_FACTSHEET: &str = "https://nssdc.gsfc.nasa.gov/planetary/factsheet/";
const SOLAR_MASS_SOURCE: &str = "derived from IAU's 2015 nominal value of the solar mass \
parameter divided by the CODATA 2018 value of the gravitational constant";
const SCHWARZSCHILD_SOURCE: &str = "derived from the IAU 2015 nominal solar mass parameter";
const GFERMI_SOURCE: &str = "derived from CODATA 2018 value for G_Fermi (identical to \
PDG 2020 value) and CODATA 2018 value of electron volt";

fn entry(
    names: &[&str],
    unit: &str,
    system: UnitSystem,
    value: f64,
    source: &str,
    dims: [i32; 7],
) -> ConstantEntry {
    ConstantEntry::new(names, unit, system, value, source, dims)
}

/// Build the seed table
pub fn seed_entries() -> Vec<ConstantEntry> {
    use UnitSystem::{Cgs, Mks, None as NoSys, Other};

    vec![
        // ====================================================================
        // Mathematical constants
        // ====================================================================
        entry(&["pi", "π"], "", NoSys, PI, "exact", [0; 7]),
        entry(&["pi2", "pisquared", "π²"], "", NoSys, PI * PI, "exact", [0; 7]),
        entry(&["pi3", "picubed", "π³"], "", NoSys, PI * PI * PI, "exact", [0; 7]),
        entry(&["pi4", "pifourth", "π⁴"], "", NoSys, PI * PI * PI * PI, "exact", [0; 7]),
        entry(&["rootpi", "squarerootpi", "√π"], "", NoSys, 1.7724538509055159, "exact", [0; 7]),
        entry(&["zeta32", "zeta(3/2)", "ζ(3/2)"], "", NoSys, 2.6123753486854883, "exact", [0; 7]),
        entry(&["zeta2", "zeta(2)", "ζ(2)"], "", NoSys, 1.6449340668482264, "exact", [0; 7]),
        entry(&["zeta52", "zeta(5/2)", "ζ(5/2)"], "", NoSys, 1.3414872572509171, "exact", [0; 7]),
        entry(&["zeta3", "zeta(3)", "ζ(3)"], "", NoSys, 1.2020569031595943, "exact", [0; 7]),
        entry(&["zeta5", "zeta(5)", "ζ(5)"], "", NoSys, 1.0369277551433699, "exact", [0; 7]),
        entry(&["zeta7", "zeta(7)", "ζ(7)"], "", NoSys, 1.0083492773819228, "exact", [0; 7]),
        entry(&["Euler-Mascheroni", "euler"], "", NoSys, 0.5772156649015329, "exact", [0; 7]),

        // ====================================================================
        // Fundamental constants (MKS/CGS pairs)
        // ====================================================================
        entry(&["speed of light", "c", "lightspeed"], "m/s", Mks,
            2.99792458e8, "exact", [1, 0, -1, 0, 0, 0, 0]),
        entry(&["speed of light", "c", "lightspeed"], "cm/s", Cgs,
            2.99792458e10, "exact", [1, 0, -1, 0, 0, 0, 0]),
        entry(&["gravitational", "g", "gnewton"], "m^3/kg/s^2", Mks,
            6.67430e-11, "CODATA 2018", [3, -1, -2, 0, 0, 0, 0]),
        entry(&["gravitational", "g", "gnewton"], "cm^3/g/s^2", Cgs,
            6.67430e-8, "CODATA 2018", [3, -1, -2, 0, 0, 0, 0]),
        entry(&["Boltzmann's", "kb", "boltzmann"], "kg*m^2/s^2/K", Mks,
            1.380649e-23, "exact", [2, 1, -2, -1, 0, 0, 0]),
        entry(&["Boltzmann's", "kb", "boltzmann"], "g*cm^2/s^2/K", Cgs,
            1.380649e-16, "exact", [2, 1, -2, -1, 0, 0, 0]),
        entry(&["Stefan-Boltzmann", "sigmasb", "stefanboltzmann", "ssb", "σsb"], "kg/s^3/K^4", Mks,
            5.670374419e-8, "exact; derived from k_B, c, and h bar", [0, 1, -3, -4, 0, 0, 0]),
        entry(&["Stefan-Boltzmann", "sigmasb", "stefanboltzmann", "ssb", "σsb"], "g/s^3/K^4", Cgs,
            5.670374419e-5, "exact; derived from k_B, c, and h bar", [0, 1, -3, -4, 0, 0, 0]),
        entry(&["Planck", "h", "plancks"], "kg*m^2/s", Mks,
            6.62607015e-34, "exact", [2, 1, -1, 0, 0, 0, 0]),
        entry(&["Planck", "h", "plancks"], "g*cm^2/s", Cgs,
            6.62607015e-27, "exact", [2, 1, -1, 0, 0, 0, 0]),
        entry(&["reduced Planck", "hbar", "ħ", "reducedplancks"], "kg*m^2/s", Mks,
            1.054571817e-34, "exact; derived from the Planck constant", [2, 1, -1, 0, 0, 0, 0]),
        entry(&["reduced Planck", "hbar", "ħ", "reducedplancks"], "g*cm^2/s", Cgs,
            1.054571817e-27, "exact; derived from the Planck constant", [2, 1, -1, 0, 0, 0, 0]),
        entry(&["Rydberg"], "kg*m^2/s^2", Mks,
            2.1798723611035e-18, "CODATA 2018", [2, 1, -2, 0, 0, 0, 0]),
        entry(&["Rydberg"], "g*cm^2/s^2", Cgs,
            2.1798723611035e-11, "CODATA 2018", [2, 1, -2, 0, 0, 0, 0]),

        // ====================================================================
        // Electromagnetic and atomic constants (CODATA 2018)
        // ====================================================================
        entry(&["vacuum permittivity", "vacuum electric permittivity",
                "permittivity of free space", "epsilon0", "ε0"], "F/m", Mks,
            8.8541878128e-12, "CODATA 2018", [-3, -1, 4, 0, 2, 0, 0]),
        entry(&["vacuum permeability", "vacuum electric permeability",
                "permeability of free space", "mu0", "μ0", "magnetic constant"], "N/A^2", Mks,
            1.25663706212e-6, "CODATA 2018", [1, 1, -2, 0, -2, 0, 0]),
        entry(&["elementary charge", "elementarycharge", "electroncharge", "e",
                "chargeelectron", "qelectron"], "C", Mks,
            1.602176634e-19, "exact", [0, 0, 1, 0, 1, 0, 0]),
        entry(&["Bohr radius", "rbohr"], "m", Mks,
            5.29177210903e-11, "CODATA 2018", [1, 0, 0, 0, 0, 0, 0]),
        entry(&["Bohr magneton"], "J/T", Mks,
            9.2740100783e-24, "CODATA 2018", [2, 0, 0, 0, 1, 0, 0]),
        entry(&["nuclear magneton"], "J/T", Mks,
            5.0507837461e-27, "CODATA 2018", [2, 0, 0, 0, 1, 0, 0]),
        entry(&["Thomson cross section", "σThomson"], "m^2", Mks,
            6.6524587321e-29, "CODATA 2018", [2, 0, 0, 0, 0, 0, 0]),
        entry(&["classical electron radius", "electron radius", "relectron", "re"], "m", Mks,
            2.8179403262e-15, "CODATA 2018", [1, 0, 0, 0, 0, 0, 0]),
        entry(&["Wien frequency displacement law", "b'", "bprime", "b′"], "Hz/K", Mks,
            5.878925757e10, "CODATA 2018", [0, 0, -1, -1, 0, 0, 0]),
        entry(&["Wien wavelength displacement law", "b"], "m/K", Mks,
            2.897771955e-3, "CODATA 2018", [1, 0, 0, -1, 0, 0, 0]),

        // ====================================================================
        // Planck units (derived from G, hbar, c, and k_B)
        // ====================================================================
        entry(&["Planck length"], "m", Mks, 1.616255e-35, "derived", [1, 0, 0, 0, 0, 0, 0]),
        entry(&["Planck mass"], "kg", Mks, 2.176434e-8, "derived", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["Planck time"], "s", Mks, 5.391247e-44, "derived", [0, 0, 1, 0, 0, 0, 0]),
        entry(&["Planck temperature"], "K", Mks, 1.416784e32, "derived", [0, 0, 0, 1, 0, 0, 0]),

        // ====================================================================
        // Dimensionless physical data
        // ====================================================================
        entry(&["Avogadro's number", "na", "avogadro"], "", NoSys,
            6.02214076e23, "exact", [0; 7]),
        entry(&["fine structure", "alphaem", "alpha", "αem"], "", NoSys,
            7.2973525693e-3, "CODATA 2018", [0; 7]),
        entry(&["sin2thetaw", "sin2θW", "sin²θW"], "", NoSys,
            0.23121, "PDG 2020 value", [0; 7]),
        entry(&["strong coupling constant at the Z mass"], "", NoSys,
            0.1179, "https://pdg.lbl.gov/2021/reviews/contents_sports.html", [0; 7]),

        // ====================================================================
        // Particle physics (OTHER-flagged units)
        // ====================================================================
        entry(&["gfermi", "gf"], "s^4/m^4/kg^2", Mks,
            4.5437957e14, GFERMI_SOURCE, [-4, -2, 4, 0, 0, 0, 0]),
        entry(&["gfermi", "gf"], "s^4/cm^4/g^2", Cgs,
            4.5437957, GFERMI_SOURCE, [-4, -2, 4, 0, 0, 0, 0]),
        entry(&["gfermi", "gf"], "1/GeV^2", Other,
            1.1663787e-5, "CODATA 2018 (identical to PDG 2020 value)", [-4, -2, 4, 0, 0, 0, 0]),
        entry(&["hbarc", "ħc"], "MeV*fm", Other,
            197.3269804, "derived from the Planck constant", [3, 1, -2, 0, 0, 0, 0]),
        entry(&["hbarc", "ħc"], "J*m", Mks,
            3.1615267734966903e-26, "derived from the Planck constant", [3, 1, -2, 0, 0, 0, 0]),
        entry(&["hbarc", "ħc"], "erg*cm", Cgs,
            3.1615267734966903e-17, "derived from the Planck constant", [3, 1, -2, 0, 0, 0, 0]),
        entry(&["mass W", "Wmass", "mW"], "GeV", Other,
            80.379, PDG_TABLES, [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass Z", "Zmass", "mZ"], "GeV", Other,
            91.1876, PDG_TABLES, [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass H", "Hmass", "mH", "mass higgs", "higgs mass", "mH0", "mH⁰"], "GeV", Other,
            125.25, PDG_TABLES, [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass lambda", "lambdamass", "mlambda", "mΛ"], "MeV", Other,
            1115.683, "\"OUR FIT\" value from PDG 2020", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass sigma minus", "sigmaminusmass", "msigma-", "mΣ-", "mΣ⁻"], "MeV", Other,
            1197.449, "\"OUR FIT\" value from PDG 2020", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass sigma zero", "sigmazeromass", "msigma0", "mΣ0", "mΣ⁰"], "MeV", Other,
            1192.642, "\"OUR FIT\" value from PDG 2020", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass sigma plus", "sigmaplusmass", "msigma+", "mΣ+", "mΣ⁺"], "MeV", Other,
            1189.37, "\"OUR FIT\" value from PDG 2020", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass cascade zero", "cascadezeromass", "mcascade0", "mxi0", "mΞ0", "mΞ⁰"],
            "MeV", Other, 1314.86, "\"OUR FIT\" value from PDG 2020", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass cascade minus", "cascademinusmass", "mcascade-", "mxi-", "mΞ-", "mΞ⁻"],
            "MeV", Other, 1321.71, "\"OUR FIT\" value from PDG 2020", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass up", "upmass", "mup"], "MeV", Other,
            2.16, "\"OUR EVALUATION\" value from PDG 2020", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass down", "downmass", "mdown"], "MeV", Other,
            4.67, "\"OUR EVALUATION\" value from PDG 2020", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass strange", "strangemass", "mstrange"], "MeV", Other,
            93.0, "\"OUR EVALUATION\" value from PDG 2020", [0, 1, 0, 0, 0, 0, 0]),

        // ====================================================================
        // Particle masses (kg/g pairs, CODATA 2018)
        // ====================================================================
        entry(&["mass electron", "electronmass", "melectron", "melec"], "kg", Mks,
            9.1093837015e-31, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass electron", "electronmass", "melectron", "melec"], "g", Cgs,
            9.1093837015e-28, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass muon", "muonmass", "mmuon"], "kg", Mks,
            1.883531627e-28, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass muon", "muonmass", "mmuon"], "g", Cgs,
            1.883531627e-25, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass tau", "taumass", "mtau"], "kg", Mks,
            3.16754e-27, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass tau", "taumass", "mtau"], "g", Cgs,
            3.16754e-24, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass neutron", "neutronmass", "mneutron", "mneut"], "kg", Mks,
            1.67492749804e-27, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass neutron", "neutronmass", "mneutron", "mneut"], "g", Cgs,
            1.67492749804e-24, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass proton", "protonmass", "mproton", "mprot"], "kg", Mks,
            1.67262192369e-27, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass proton", "protonmass", "mproton", "mprot"], "g", Cgs,
            1.67262192369e-24, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass deuteron", "deuteronmass", "mdeuteron", "mdeut"], "kg", Mks,
            3.3435837724e-27, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass deuteron", "deuteronmass", "mdeuteron", "mdeut"], "g", Cgs,
            3.3435837724e-24, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass triton", "tritonmass", "mtriton"], "kg", Mks,
            5.0073567446e-27, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass triton", "tritonmass", "mtriton"], "g", Cgs,
            5.0073567446e-24, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass helion", "helionmass", "mhelion"], "kg", Mks,
            5.0064127796e-27, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass helion", "helionmass", "mhelion"], "g", Cgs,
            5.0064127796e-24, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass alpha", "alphamass", "malpha", "mα"], "kg", Mks,
            6.6446573357e-27, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass alpha", "alphamass", "malpha", "mα"], "g", Cgs,
            6.6446573357e-24, "CODATA 2018", [0, 1, 0, 0, 0, 0, 0]),

        // ====================================================================
        // Astronomy: Schwarzschild radius, masses, and radii
        // ====================================================================
        entry(&["Schwarzschild radius", "rschwarz"], "m", Mks,
            2.9532500770335e3, SCHWARZSCHILD_SOURCE, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["Schwarzschild radius", "rschwarz"], "cm", Cgs,
            2.9532500770335e5, SCHWARZSCHILD_SOURCE, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["Schwarzschild radius", "rschwarz"], "km", Mks,
            2.9532500770335, SCHWARZSCHILD_SOURCE, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["mass solar", "solarmass", "masssun", "sunmass", "msun", "modot", "m☉"],
            "kg", Mks, 1.9884099e30, SOLAR_MASS_SOURCE, [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass solar", "solarmass", "masssun", "sunmass", "msun", "modot", "m☉"],
            "g", Cgs, 1.9884099e33, SOLAR_MASS_SOURCE, [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass mercury", "mercurymass", "mmercury", "m☿"], "kg", Mks,
            3.3011e23, "", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass mercury", "mercurymass", "mmercury", "m☿"], "g", Cgs,
            3.3011e26, "", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass venus", "venusmass", "mvenus", "m♀"], "kg", Mks,
            4.8675e24, "", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass venus", "venusmass", "mvenus", "m♀"], "g", Cgs,
            4.8675e27, "", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass earth", "earthmass", "mearth", "m♁", "m⊕", "moplus"], "kg", Mks,
            5.9722e24, "IAU 2015 nominal value", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass earth", "earthmass", "mearth", "m♁", "m⊕", "moplus"], "g", Cgs,
            5.9722e27, "IAU 2015 nominal value", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass mars", "marsmass", "mmars", "m♂"], "kg", Mks,
            6.4171e23, "", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass mars", "marsmass", "mmars", "m♂"], "g", Cgs,
            6.4171e26, "", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass jupiter", "jupitermass", "mjupiter", "mjup", "m♃"], "kg", Mks,
            1.8981246e27, "IAU 2015 nominal value", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass jupiter", "jupitermass", "mjupiter", "mjup", "m♃"], "g", Cgs,
            1.8981246e30, "IAU 2015 nominal value", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass saturn", "saturnmass", "msaturn", "m♄"], "kg", Mks,
            5.6834e26, "", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass saturn", "saturnmass", "msaturn", "m♄"], "g", Cgs,
            5.6834e29, "", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass uranus", "uranusmass", "muranus", "m♅"], "kg", Mks,
            8.6810e25, "", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass uranus", "uranusmass", "muranus", "m♅"], "g", Cgs,
            8.6810e28, "", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass neptune", "neptunemass", "mneptune", "m♆"], "kg", Mks,
            1.02413e26, "", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass neptune", "neptunemass", "mneptune", "m♆"], "g", Cgs,
            1.02413e29, "", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass pluto", "plutomass", "mpluto", "m♇"], "kg", Mks,
            1.303e22, "", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["mass pluto", "plutomass", "mpluto", "m♇"], "g", Cgs,
            1.303e25, "", [0, 1, 0, 0, 0, 0, 0]),
        entry(&["radius solar", "solarradius", "radiussun", "sunradius", "rsun", "r☉"],
            "m", Mks, 6.957e8, "", [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius solar", "solarradius", "radiussun", "sunradius", "rsun", "r☉"],
            "cm", Cgs, 6.957e10, "", [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius mercury", "mercuryradius", "rmercury", "r☿"], "m", Mks,
            2.4397e6, "", [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius mercury", "mercuryradius", "rmercury", "r☿"], "cm", Cgs,
            2.4397e8, "", [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius venus", "venusradius", "rvenus", "r♀"], "m", Mks,
            6.0518e6, "", [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius venus", "venusradius", "rvenus", "r♀"], "cm", Cgs,
            6.0518e8, "", [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius earth equatorial", "earthequatorialradius",
                "earthradiusequatorial", "r♁eq", "r⊕eq"], "m", Mks,
            6.3781e6, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius earth equatorial", "earthequatorialradius",
                "earthradiusequatorial", "r♁eq", "r⊕eq"], "cm", Cgs,
            6.3781e8, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius earth polar", "earthpolarradius",
                "earthradiuspolar", "r♁pol", "r⊕pol"], "m", Mks,
            6.3568e6, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius earth polar", "earthpolarradius",
                "earthradiuspolar", "r♁pol", "r⊕pol"], "cm", Cgs,
            6.3568e8, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius mars equatorial", "marsequatorialradius",
                "marsradiusequatorial", "r♂eq"], "m", Mks,
            3.3962e6, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius mars equatorial", "marsequatorialradius",
                "marsradiusequatorial", "r♂eq"], "cm", Cgs,
            3.3962e8, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius mars polar", "marspolarradius",
                "marsradiuspolar", "r♂pol"], "m", Mks,
            3.3762e6, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius mars polar", "marspolarradius",
                "marsradiuspolar", "r♂pol"], "cm", Cgs,
            3.3762e8, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius jupiter equatorial", "jupiterequatorialradius",
                "jupiterradiusequatorial", "r♃eq"], "m", Mks,
            7.1492e7, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius jupiter equatorial", "jupiterequatorialradius",
                "jupiterradiusequatorial", "r♃eq"], "cm", Cgs,
            7.1492e9, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius jupiter polar", "jupiterpolarradius",
                "jupiterradiuspolar", "r♃pol"], "m", Mks,
            6.6854e7, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius jupiter polar", "jupiterpolarradius",
                "jupiterradiuspolar", "r♃pol"], "cm", Cgs,
            6.6854e9, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius saturn equatorial", "saturnequatorialradius",
                "saturnradiusequatorial", "r♄eq"], "m", Mks,
            6.0268e7, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius saturn equatorial", "saturnequatorialradius",
                "saturnradiusequatorial", "r♄eq"], "cm", Cgs,
            6.0268e9, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius saturn polar", "saturnpolarradius",
                "saturnradiuspolar", "r♄pol"], "m", Mks,
            5.4364e7, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius saturn polar", "saturnpolarradius",
                "saturnradiuspolar", "r♄pol"], "cm", Cgs,
            5.4364e9, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius uranus equatorial", "uranusequatorialradius",
                "uranusradiusequatorial", "r♅eq"], "m", Mks,
            2.5559e7, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius uranus equatorial", "uranusequatorialradius",
                "uranusradiusequatorial", "r♅eq"], "cm", Cgs,
            2.5559e9, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius uranus polar", "uranuspolarradius",
                "uranusradiuspolar", "r♅pol"], "m", Mks,
            2.4973e7, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius uranus polar", "uranuspolarradius",
                "uranusradiuspolar", "r♅pol"], "cm", Cgs,
            2.4973e9, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius neptune equatorial", "neptuneequatorialradius",
                "neptuneradiusequatorial", "r♆eq"], "m", Mks,
            2.4764e7, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius neptune equatorial", "neptuneequatorialradius",
                "neptuneradiusequatorial", "r♆eq"], "cm", Cgs,
            2.4764e9, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius neptune polar", "neptunepolarradius",
                "neptuneradiuspolar", "r♆pol"], "m", Mks,
            2.4341e7, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius neptune polar", "neptunepolarradius",
                "neptuneradiuspolar", "r♆pol"], "cm", Cgs,
            2.4341e9, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius pluto", "plutoradius", "rpluto", "r♇"], "m", Mks,
            1.1883e6, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),
        entry(&["radius pluto", "plutoradius", "rpluto", "r♇"], "cm", Cgs,
            1.1883e8, NASA_FACTSHEET, [1, 0, 0, 0, 0, 0, 0]),

        // ====================================================================
        // Astronomical lengths and years
        // ====================================================================
        entry(&["astronomical unit", "au"], "m", Mks,
            1.495978707e11, "IAU 2012 exact definition", [1, 0, 0, 0, 0, 0, 0]),
        entry(&["parsec", "pc"], "m", Mks,
            3.0856775814913673e16, "derived from the IAU 2012 astronomical unit",
            [1, 0, 0, 0, 0, 0, 0]),
        entry(&["light year", "lightyear", "ly"], "m", Mks,
            9.4607304725808e15, "Julian year times the speed of light",
            [1, 0, 0, 0, 0, 0, 0]),
        entry(&["tropical year", "yeartropical"], "s", Mks,
            31556925.1, PDG_REVIEWS, [0, 0, 1, 0, 0, 0, 0]),
        entry(&["sidereal year", "yearsidereal"], "s", Mks,
            31558149.8, PDG_REVIEWS, [0, 0, 1, 0, 0, 0, 0]),
        entry(&["Julian year", "yearjulian"], "s", Mks,
            31557600.0, "exact; 365.25 days of 86400 s", [0, 0, 1, 0, 0, 0, 0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_variants_are_adjacent() {
        // Equal name lists must be consecutive for group assignment to work
        let entries = seed_entries();
        for (i, a) in entries.iter().enumerate() {
            for b in entries.iter().skip(i + 2) {
                if a.names == b.names {
                    let gap = &entries[i + 1];
                    assert_eq!(
                        gap.names, a.names,
                        "variants of {:?} are not adjacent",
                        a.names[0]
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_alias_shared_between_quantities() {
        // Exact-string aliases may repeat only between unit variants
        let entries = seed_entries();
        for (i, a) in entries.iter().enumerate() {
            for b in entries.iter().skip(i + 1) {
                if a.names == b.names {
                    continue;
                }
                for alias in &a.names {
                    assert!(
                        !b.names.contains(alias),
                        "alias {:?} appears under both {:?} and {:?}",
                        alias,
                        a.names[0],
                        b.names[0]
                    );
                }
            }
        }
    }

    #[test]
    fn test_spot_values() {
        let entries = seed_entries();
        let c = entries
            .iter()
            .find(|e| e.names.contains(&"lightspeed".to_string()) && e.unit == "m/s")
            .unwrap();
        assert_eq!(c.value, 2.99792458e8);

        let pi = entries.iter().find(|e| e.name() == "pi").unwrap();
        assert_eq!(pi.value, std::f64::consts::PI);
        assert_eq!(pi.unit, "");
        assert_eq!(pi.unit_system, UnitSystem::None);
    }
}
